use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{AppConfig, AppError, RegisterForm, MIN_PASSWORD_LEN};
use shared_ui::{Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, FormField};

/// Patient sign-up form. Shows a closed notice when registration is disabled.
#[component]
pub fn Register() -> Element {
    let config: AppConfig = use_context();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut errors = use_signal(|| Option::<AppError>::None);
    let mut submitted = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let form = RegisterForm {
            name: name(),
            email: email(),
            password: password(),
            confirm_password: confirm_password(),
        };
        match form.validate() {
            Ok(()) => {
                tracing::info!("registration form passed validation");
                errors.set(None);
                submitted.set(true);
            }
            Err(e) => {
                submitted.set(false);
                errors.set(Some(e));
            }
        }
    };

    let field_error = move |field: &str| {
        errors
            .read()
            .as_ref()
            .and_then(|e| e.field(field).map(str::to_string))
    };

    let password_hint = format!("At least {MIN_PASSWORD_LEN} characters");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Create your account" }
                    CardDescription { "Book visits, message your care team and see results." }
                }

                CardContent {
                    if !config.features.registration {
                        div { class: "auth-notice",
                            "Online registration is not open yet. Please call the clinic to register."
                        }
                    } else {
                        if submitted() {
                            div { class: "auth-notice",
                                "Thanks! Check your inbox to confirm your email address."
                            }
                        }

                        form { class: "auth-form", onsubmit: handle_register,
                            FormField {
                                id: "name",
                                label: "Full name",
                                placeholder: "Jane Doe",
                                value: name(),
                                on_input: move |e: FormEvent| name.set(e.value()),
                                error: field_error("name"),
                            }
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
                                placeholder: password_hint,
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                                error: field_error("password"),
                            }
                            FormField {
                                id: "confirm_password",
                                label: "Confirm password",
                                input_type: "password",
                                value: confirm_password(),
                                on_input: move |e: FormEvent| confirm_password.set(e.value()),
                                error: field_error("confirm_password"),
                            }
                            Button { button_type: "submit", class: "auth-submit", "Create account" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already registered? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
