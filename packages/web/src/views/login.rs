use api::ApiClient;
use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    // Already logged in: nothing to do here.
    use_effect(move || {
        let state = session.state();
        if !state.loading && state.is_logged_in() {
            nav.replace(Route::Home {});
        }
    });

    let mut handle_submit = move || {
        if *submitting.peek() {
            return;
        }
        let user = username().trim().to_string();
        let pass = password();
        if user.is_empty() {
            error.set(Some("Username is required".to_string()));
            return;
        }
        if pass.is_empty() {
            error.set(Some("Password is required".to_string()));
            return;
        }
        submitting.set(true);
        error.set(None);
        spawn(async move {
            let result = ApiClient::new().login(&user, &pass).await;
            submitting.set(false);
            match result {
                Ok(tokens) => {
                    session.login(&tokens.access_token).await;
                    nav.push(Route::Home {});
                }
                Err(err) => {
                    error.set(Some(err.user_message("Incorrect username or password")));
                }
            }
        });
    };

    rsx! {
        section { class: "page page-auth",
            h1 { "Log in" }
            form {
                class: "auth-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    handle_submit();
                },
                input {
                    class: "text-input",
                    r#type: "text",
                    placeholder: "Username",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                input {
                    class: "text-input",
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Logging in..." } else { "Log in" }
                }
            }
            p { class: "auth-switch",
                "No account yet? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
