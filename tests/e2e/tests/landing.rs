use e2e::{browser::Browser, test_server::TestServer};

#[tokio::test]
async fn test_footer_opens_legal_notice() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(server.url()).expect("Failed to navigate");
    page.settle();

    page.click("#footer_mentions").expect("Footer link should exist");
    page.settle();

    let result = page.find_element(".legal_page h1");
    assert!(result.is_ok(), "Legal notice should be rendered");
    let pricing_mounted = page
        .eval_string("String(!!document.getElementById('pricing'))")
        .expect("Failed to evaluate");
    assert_eq!(pricing_mounted, "false", "Home sections should be unmounted");
}

#[tokio::test]
async fn test_demo_form_fields_exist() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(server.url()).expect("Failed to navigate");
    page.settle();
    page.click(".nav_cta").expect("Demo CTA should exist");

    for selector in [
        "input[name='company']",
        "select[name='company_size']",
        "input[name='firstname']",
        "input[name='lastname']",
        "input[name='email']",
        "input[name='phone']",
        "textarea[name='message']",
        "button[type='submit']",
    ] {
        assert!(page.find_element(selector).is_ok(), "{selector} should exist");
    }
}

#[tokio::test]
async fn test_phone_field_keeps_digits_only() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(server.url()).expect("Failed to navigate");
    page.settle();
    page.click(".nav_cta").expect("Demo CTA should exist");

    page.type_text("input[name='phone']", "06a12b34")
        .expect("Failed to type phone");
    page.settle();

    let value = page.input_value("input[name='phone']").expect("Failed to read phone");
    assert_eq!(value, "061234");
}
