use dioxus::prelude::*;

const LANG_STORAGE_KEY: &str = "companion_lang";

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Fr,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        match code.split(['-', '_']).next().unwrap_or_default() {
            "en" => Some(Lang::En),
            "fr" => Some(Lang::Fr),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Lang::En => Lang::Fr,
            Lang::Fr => Lang::En,
        }
    }
}

/// Provide `Signal<Lang>` to the component tree, defaulting to English.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let mut lang = use_signal(|| Lang::En);
    use_context_provider(|| lang);

    // Best-effort: saved preference, then the webview language.
    use_effect(move || {
        spawn(async move {
            let js = format!(
                r#"
                (function(){{
                  try {{
                    const saved = localStorage.getItem("{LANG_STORAGE_KEY}");
                    if(saved && typeof saved === "string" && saved.length > 0) return saved;
                  }} catch(e) {{}}
                  try {{ return (navigator.language || "en"); }} catch(e) {{}}
                  return "en";
                }})()
                "#
            );
            if let Ok(v) = document::eval(&js).await {
                if let Some(next) = v.as_str().and_then(Lang::from_code) {
                    lang.set(next);
                }
            }
        });
    });

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    tracing::warn!("i18n: missing I18nProvider context, using local Lang::En signal");
    use_signal(|| Lang::En)
}

/// Switch language and remember the choice.
pub fn set_lang(mut signal: Signal<Lang>, lang: Lang) {
    signal.set(lang);
    spawn(async move {
        let _ = document::eval(&format!(
            r#"(function(){{ try {{ localStorage.setItem("{LANG_STORAGE_KEY}","{}"); }} catch(e) {{}} return ""; }})()"#,
            lang.code()
        ))
        .await;
    });
}

/// Small button flipping between the two languages.
#[component]
pub fn LangToggle() -> Element {
    let lang = use_lang();
    let next = lang().other();

    rsx! {
        button {
            class: "lang_toggle",
            onclick: move |_| set_lang(lang, next),
            {next.code().to_uppercase()}
        }
    }
}

/// Translate a key. Missing French strings fall back to English, missing
/// English strings to the key itself.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        (Lang::En, "app.name") => "Educational Companion".to_string(),
        (Lang::Fr, "app.name") => "Compagnon éducatif".to_string(),
        (Lang::En, "nav.player") => "Video Player".to_string(),
        (Lang::Fr, "nav.player") => "Lecteur vidéo".to_string(),
        (Lang::En, "nav.back") => "Back".to_string(),
        (Lang::Fr, "nav.back") => "Retour".to_string(),
        (Lang::En, "common.loading") => "Loading…".to_string(),
        (Lang::Fr, "common.loading") => "Chargement…".to_string(),

        // Feed
        (Lang::En, "feed.top") => "Top Videos".to_string(),
        (Lang::Fr, "feed.top") => "Vidéos à la une".to_string(),
        (Lang::En, "feed.empty") => "No videos available yet.".to_string(),
        (Lang::Fr, "feed.empty") => "Aucune vidéo pour le moment.".to_string(),
        (Lang::En, "feed.error") => "Failed to fetch videos. Please check your connection.".to_string(),
        (Lang::Fr, "feed.error") => "Impossible de charger les vidéos. Vérifiez votre connexion.".to_string(),

        // Player
        (Lang::En, "player.missing_id") => "Video ID not found.".to_string(),
        (Lang::Fr, "player.missing_id") => "Identifiant de vidéo introuvable.".to_string(),
        (Lang::En, "player.error") => "Failed to load video data. Please try again.".to_string(),
        (Lang::Fr, "player.error") => "Impossible de charger la vidéo. Veuillez réessayer.".to_string(),
        (Lang::En, "player.play") => "Play".to_string(),
        (Lang::Fr, "player.play") => "Lecture".to_string(),
        (Lang::En, "player.pause") => "Pause".to_string(),
        (Lang::En, "player.concepts") => "Related NCERT Concepts".to_string(),
        (Lang::Fr, "player.concepts") => "Notions NCERT associées".to_string(),
        (Lang::En, "player.no_concepts") => "No concepts found for this video.".to_string(),
        (Lang::Fr, "player.no_concepts") => "Aucune notion trouvée pour cette vidéo.".to_string(),

        (Lang::Fr, k) => t(Lang::En, k),
        (Lang::En, _) => key.to_string(),
    }
}
