use e2e::browser::{Browser, Page};
use e2e::test_server::TestServer;

const FR_OPTION: &str = ".lang_toggle button:nth-child(1)";
const EN_OPTION: &str = ".lang_toggle button:nth-child(2)";

fn stored_lang(page: &Page) -> String {
    page.eval_string("String(localStorage.getItem('closerai_lang'))")
        .expect("Failed to read localStorage")
}

fn pressed(page: &Page, selector: &str) -> String {
    page.eval_string(&format!(
        "String(document.querySelector(\"{selector}\").getAttribute('aria-pressed'))"
    ))
    .expect("Failed to read aria-pressed")
}

#[tokio::test]
async fn test_language_choice_survives_reload() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(server.url()).expect("Failed to navigate");
    page.settle();

    page.click(FR_OPTION).expect("FR option should exist");
    page.settle();
    assert_eq!(stored_lang(&page), "fr");

    page.reload().expect("Failed to reload");
    page.settle();
    assert_eq!(pressed(&page, FR_OPTION), "true");
    assert_eq!(pressed(&page, EN_OPTION), "false");
    let mentions = page.find_element("#footer_mentions").expect("Footer link should exist");
    assert_eq!(mentions.trim(), "Mentions légales");

    page.click(EN_OPTION).expect("EN option should exist");
    page.settle();
    assert_eq!(stored_lang(&page), "en");

    page.reload().expect("Failed to reload");
    page.settle();
    assert_eq!(pressed(&page, EN_OPTION), "true");
    let mentions = page.find_element("#footer_mentions").expect("Footer link should exist");
    assert_eq!(mentions.trim(), "Legal notice");
}
