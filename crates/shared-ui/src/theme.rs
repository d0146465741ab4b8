use dioxus::prelude::*;

/// Colour schemes for the clinic site.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ClinicTheme {
    #[default]
    Daylight,
    Evening,
}

impl ClinicTheme {
    /// Value written to the `data-theme` attribute and the theme cookie.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClinicTheme::Daylight => "daylight",
            ClinicTheme::Evening => "evening",
        }
    }

    /// Parse a stored key, falling back to Daylight.
    pub fn from_key(s: &str) -> Self {
        match s {
            "evening" => ClinicTheme::Evening,
            _ => ClinicTheme::Daylight,
        }
    }

    /// Pick the `theme` entry out of a `document.cookie` string.
    pub fn from_cookie(cookie: &str) -> Self {
        cookie
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == "theme")
            .map(|(_, value)| Self::from_key(value))
            .unwrap_or_default()
    }

    pub fn toggled(&self) -> Self {
        match self {
            ClinicTheme::Daylight => ClinicTheme::Evening,
            ClinicTheme::Evening => ClinicTheme::Daylight,
        }
    }

    /// Label for the button that switches away from this theme.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ClinicTheme::Daylight => "Evening mode",
            ClinicTheme::Evening => "Daylight mode",
        }
    }
}

/// Shared theme state provided as context by the portal layout.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: Signal<ClinicTheme>,
}

impl ThemeState {
    pub fn toggle(&mut self) {
        let next = self.theme.read().toggled();
        self.theme.set(next);
        set_theme(next);
    }
}

/// Apply the persisted theme to the document root on startup.
///
/// Call this once in the top-level App component.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        document::eval(
            r#"
            (function() {
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1] : 'daylight';
                document.documentElement.setAttribute('data-theme', theme);
            })();
            "#,
        );
    });

    rsx! {}
}

/// Load the persisted theme into `theme` once the document is reachable,
/// so toggles start from what [`ThemeSeed`] applied.
pub fn use_stored_theme(mut theme: Signal<ClinicTheme>) {
    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval("dioxus.send(document.cookie);");
            if let Ok(cookie) = eval.recv::<String>().await {
                theme.set(ClinicTheme::from_cookie(&cookie));
            }
        });
    });
}

/// Persist the theme to a cookie and update the document.
pub fn set_theme(theme: ClinicTheme) {
    let theme = theme.as_str();
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
        }})();
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_daylight() {
        assert_eq!(ClinicTheme::default(), ClinicTheme::Daylight);
    }

    #[test]
    fn from_key_roundtrip_and_fallback() {
        for theme in [ClinicTheme::Daylight, ClinicTheme::Evening] {
            assert_eq!(ClinicTheme::from_key(theme.as_str()), theme);
        }
        assert_eq!(ClinicTheme::from_key("cyberpunk"), ClinicTheme::Daylight);
        assert_eq!(ClinicTheme::from_key(""), ClinicTheme::Daylight);
    }

    #[test]
    fn from_cookie_finds_the_theme_entry() {
        assert_eq!(
            ClinicTheme::from_cookie("session=abc; theme=evening; lang=en"),
            ClinicTheme::Evening
        );
        assert_eq!(ClinicTheme::from_cookie("theme=evening"), ClinicTheme::Evening);
        assert_eq!(ClinicTheme::from_cookie("theme=daylight"), ClinicTheme::Daylight);
        assert_eq!(ClinicTheme::from_cookie("mytheme=evening"), ClinicTheme::Daylight);
        assert_eq!(ClinicTheme::from_cookie(""), ClinicTheme::Daylight);
    }

    #[test]
    fn toggled_flips_between_the_two() {
        assert_eq!(ClinicTheme::Daylight.toggled(), ClinicTheme::Evening);
        assert_eq!(ClinicTheme::Evening.toggled().toggled(), ClinicTheme::Evening);
        assert_eq!(ClinicTheme::Daylight.toggle_label(), "Evening mode");
    }
}
