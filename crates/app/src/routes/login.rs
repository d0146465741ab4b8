use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{AppConfig, AppError, LoginForm};
use shared_ui::{Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, FormField};

/// Sign-in form.
///
/// Fields are checked locally; issuing the session is the clinic API's job,
/// so a valid submission only confirms the details were accepted.
#[component]
pub fn Login() -> Element {
    let config: AppConfig = use_context();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(|| Option::<AppError>::None);
    let mut submitted = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let form = LoginForm {
            email: email(),
            password: password(),
        };
        match form.validate() {
            Ok(()) => {
                tracing::info!("login form passed validation");
                errors.set(None);
                submitted.set(true);
            }
            Err(e) => {
                submitted.set(false);
                errors.set(Some(e));
            }
        }
    };

    let field_error = move |name: &str| {
        errors
            .read()
            .as_ref()
            .and_then(|e| e.field(name).map(str::to_string))
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign in" }
                    CardDescription { "Access your appointments and messages." }
                }

                CardContent {
                    if submitted() {
                        div { class: "auth-notice",
                            "Thanks! We're signing you in through the patient portal."
                        }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        FormField {
                            id: "email",
                            label: "Email",
                            input_type: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                            error: field_error("email"),
                        }
                        FormField {
                            id: "password",
                            label: "Password",
                            input_type: "password",
                            placeholder: "Your password",
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                            error: field_error("password"),
                        }
                        Button { button_type: "submit", class: "auth-submit", "Sign in" }
                    }
                }

                if config.features.registration {
                    CardFooter {
                        p { class: "auth-link",
                            "New patient? "
                            Link { to: Route::Register {}, "Create an account" }
                        }
                    }
                }
            }
        }
    }
}
