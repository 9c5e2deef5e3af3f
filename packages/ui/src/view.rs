use dioxus::prelude::*;

/// Top-level screens. Exactly one is rendered at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Mentions,
    Cgv,
    Demo,
}

impl View {
    pub const ALL: [View; 4] = [View::Home, View::Mentions, View::Cgv, View::Demo];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Go(View),
    /// Return to the home view. There is no history stack.
    Back,
}

/// Current view. Starts on `Home` on every page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    current: View,
}

impl ViewState {
    pub fn current(&self) -> View {
        self.current
    }

    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::Go(view) => Self { current: view },
            NavAction::Back => Self::default(),
        }
    }
}

/// Handle given to every screen for switching views.
#[derive(Clone, Copy, PartialEq)]
pub struct ViewRouter {
    state: Signal<ViewState>,
}

impl ViewRouter {
    pub fn current(&self) -> View {
        (self.state)().current()
    }

    pub fn dispatch(&self, action: NavAction) {
        let mut state = self.state;
        let next = state.peek().apply(action);
        if next != *state.peek() {
            state.set(next);
        }
    }

    pub fn go(&self, view: View) {
        self.dispatch(NavAction::Go(view));
    }

    pub fn back(&self) {
        self.dispatch(NavAction::Back);
    }
}

pub fn use_view_router() -> ViewRouter {
    use_context::<ViewRouter>()
}

#[component]
pub fn ViewRouterProvider(children: Element) -> Element {
    let state = use_signal(ViewState::default);
    use_context_provider(|| ViewRouter { state });

    rsx! { {children} }
}
