use api::ApiClient;
use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let mut handle_submit = move || {
        if *submitting.peek() {
            return;
        }
        let user = username().trim().to_string();
        let mail = email().trim().to_string();
        let pass = password();
        if user.is_empty() {
            error.set(Some("Username is required".to_string()));
            return;
        }
        if mail.is_empty() {
            error.set(Some("Email is required".to_string()));
            return;
        }
        if pass.is_empty() {
            error.set(Some("Password is required".to_string()));
            return;
        }
        submitting.set(true);
        error.set(None);
        spawn(async move {
            let result = ApiClient::new().register(&user, &mail, &pass).await;
            submitting.set(false);
            match result {
                // A new account is not logged in yet; hand over to the
                // login form.
                Ok(()) => {
                    nav.push(Route::Login {});
                }
                Err(err) => {
                    error.set(Some(err.user_message("Registration failed")));
                }
            }
        });
    };

    rsx! {
        section { class: "page page-auth",
            h1 { "Register" }
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
                    r#type: "email",
                    placeholder: "Email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
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
                    if submitting() { "Registering..." } else { "Register" }
                }
            }
            p { class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Log in" }
            }
        }
    }
}
