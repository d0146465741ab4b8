pub mod admin;
pub mod chat;
pub mod doctor;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
pub mod services;
pub mod specialties;

use crate::session::{use_session, SidebarVisibility};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdMessageCircle, LdShield, LdStethoscope, LdUserCheck,
};
use dioxus_free_icons::Icon;
use shared_types::{AppConfig, Decision, RoleGate, CLINIC_NAME};
use shared_ui::theme::{use_stored_theme, ClinicTheme, ThemeState};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, ChatLauncher, Navbar, NavbarBrand, NavbarLinks,
    Sidebar, SidebarContent, SidebarFooter, SidebarGroup, SidebarHeader, SidebarInset,
    SidebarMenuItem, SidebarProvider, SidebarSeparator, SidebarTrigger,
};

use admin::AdminDashboard;
use chat::Chat;
use doctor::DoctorDashboard;
use home::Home;
use login::Login;
use not_found::NotFound;
use register::Register;
use services::Services;
use specialties::Specialties;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(SiteLayout)]
    #[layout(RoleGuard)]
    #[route("/")]
    Home {},
    #[route("/services")]
    Services {},
    #[route("/specialties")]
    Specialties {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[end_layout]
    #[route("/chat")]
    Chat {},
    #[end_layout]
    #[layout(PortalLayout)]
    #[route("/admin")]
    AdminDashboard {},
    #[route("/doctor")]
    DoctorDashboard {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Whether `route` renders inside [`RoleGuard`].
pub fn is_guarded(route: &Route) -> bool {
    matches!(
        route,
        Route::Home {}
            | Route::Services {}
            | Route::Specialties {}
            | Route::Login {}
            | Route::Register {}
    )
}

/// Resolve a landing path to a view the guard may send visitors to.
///
/// Paths that only reach `NotFound`, or that are themselves guarded and
/// would bounce again, resolve to `None`.
fn landing_route(target: &str) -> Option<Route> {
    match target.parse::<Route>().ok()? {
        Route::NotFound { .. } => None,
        route if is_guarded(&route) => None,
        route => Some(route),
    }
}

/// Role guard layout: signed-in admins and doctors who open a public page
/// are sent to their landing view. Everyone else, including visitors whose
/// stored session cannot be read, sees the page.
///
/// The decision is recomputed from the store on every render. Redirects
/// replace the current history entry so Back does not return to the page
/// the visitor was bounced from.
#[component]
fn RoleGuard() -> Element {
    let route: Route = use_route();
    let session = use_session();
    let config: AppConfig = use_context();

    let requested = route.to_string();
    let gate = RoleGate::new(&config.gate);

    let target = match session.evaluate(&gate, &requested) {
        Decision::Allow => return rsx! { Outlet::<Route> {} },
        Decision::Redirect(target) => target,
    };

    match landing_route(&target) {
        Some(landing) => {
            tracing::debug!(%target, %requested, "role gate redirect");
            navigator().replace(landing);
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
        None => {
            tracing::warn!(%target, "landing path has no view outside the guard, allowing");
            rsx! { Outlet::<Route> {} }
        }
    }
}

/// Public site chrome: top navbar, footer and the floating chat button.
#[component]
fn SiteLayout() -> Element {
    let route: Route = use_route();
    let config: AppConfig = use_context();

    let current_path = route.to_string();
    let show_launcher =
        config.features.chat_launcher && config.chat.launcher_visible(&current_path);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        Navbar {
            Link { to: Route::Home {},
                NavbarBrand {
                    title: CLINIC_NAME.to_string(),
                    tagline: "Book care online".to_string(),
                }
            }
            NavbarLinks {
                Link { to: Route::Services {}, "Services" }
                Link { to: Route::Specialties {}, "Specialties" }
                Link { to: Route::Login {}, "Sign in" }
                if config.features.registration {
                    Link { to: Route::Register {}, class: "nav-cta", "Book now" }
                }
            }
        }

        main { class: "site-main", Outlet::<Route> {} }

        footer { class: "site-footer",
            span { "© {CLINIC_NAME}" }
            span { class: "site-footer-note", "In an emergency call your local emergency number." }
        }

        ChatLauncher {
            hidden: !show_launcher,
            onclick: move |_| {
                navigator().push(Route::Chat {});
            },
            Icon::<LdMessageCircle> { icon: LdMessageCircle, width: 24, height: 24 }
        }
    }
}

/// Staff portal layout with the role-aware sidebar.
#[component]
fn PortalLayout() -> Element {
    let route: Route = use_route();
    let session = use_session();

    let role = session.role();
    let vis = SidebarVisibility::for_role(role);
    let display_name = session
        .record()
        .map(|r| r.display_name().to_string())
        .unwrap_or_else(|| "Guest".to_string());
    let role_label = role.as_str();

    let mut theme_state = use_context_provider(|| ThemeState {
        theme: Signal::new(ClinicTheme::default()),
    });
    use_stored_theme(theme_state.theme);
    let toggle_label = theme_state.theme.read().toggle_label();

    let page_title = match &route {
        Route::AdminDashboard {} => "Admin Console",
        Route::DoctorDashboard {} => "Doctor Workspace",
        _ => "",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: true,
            Sidebar {
                SidebarHeader {
                    span { class: "sidebar-brand-name", "{CLINIC_NAME}" }
                }

                SidebarSeparator {}

                SidebarContent {
                    if vis.admin_console {
                        SidebarGroup { label: "Administration",
                            SidebarMenuItem { active: matches!(route, Route::AdminDashboard {}),
                                Link { to: Route::AdminDashboard {},
                                    Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
                                    "Admin Console"
                                }
                            }
                        }
                    }

                    if vis.doctor_workspace {
                        SidebarGroup { label: "Clinical",
                            SidebarMenuItem { active: matches!(route, Route::DoctorDashboard {}),
                                Link { to: Route::DoctorDashboard {},
                                    Icon::<LdStethoscope> { icon: LdStethoscope, width: 18, height: 18 }
                                    "Doctor Workspace"
                                }
                            }
                        }
                    }

                    SidebarGroup { label: "Clinic",
                        if vis.public_site {
                            SidebarMenuItem {
                                Link { to: Route::Home {},
                                    Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 }
                                    "Public site"
                                }
                            }
                            SidebarMenuItem {
                                Link { to: Route::Specialties {},
                                    Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
                                    "Specialties"
                                }
                            }
                        }
                        SidebarMenuItem {
                            Link { to: Route::Chat {},
                                Icon::<LdMessageCircle> { icon: LdMessageCircle, width: 18, height: 18 }
                                "Patient chat"
                            }
                        }
                    }
                }

                SidebarFooter {
                    div { class: "sidebar-user",
                        span { class: "sidebar-user-name", "{display_name}" }
                        Badge { variant: BadgeVariant::Secondary, "{role_label}" }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| theme_state.toggle(),
                        "{toggle_label}"
                    }
                }
            }

            SidebarInset {
                div { class: "portal-topbar",
                    SidebarTrigger {
                        span { class: "portal-trigger-icon", "\u{2630}" }
                    }
                    span { class: "portal-title", "{page_title}" }
                }
                div { class: "page-content", Outlet::<Route> {} }
            }
        }
    }
}
