use crate::domain::model::{StatusBanner, StatusKind};
use crate::domain::ports::Page;

pub const SUCCESS_MESSAGE: &str = "Mensagem enviada!";
pub const ERROR_MESSAGE: &str = "Erro a enviar mensagem!";

/// Builds the banner for `kind`, or `None` when there is no message and the
/// banner should be hidden.
pub fn render_status(kind: &StatusKind, message: Option<&str>) -> Option<StatusBanner> {
    let text = message?;

    let (css_class, icon_class, sr_label) = match kind {
        StatusKind::Error => (
            "alert alert-danger",
            "glyphicon glyphicon-exclamation-sign",
            "Error:".to_string(),
        ),
        StatusKind::Success => (
            "alert alert-success",
            "glyphicon glyphicon-ok",
            "Success:".to_string(),
        ),
        StatusKind::Info => ("alert alert-info", "glyphicon", "Info:".to_string()),
        StatusKind::Other(name) => (
            "alert alert-info",
            "glyphicon",
            format!("{}:", capitalize(name)),
        ),
    };

    Some(StatusBanner {
        kind: kind.clone(),
        css_class,
        icon_class,
        sr_label,
        text: text.to_string(),
    })
}

pub fn show_status<P: Page + ?Sized>(page: &mut P, kind: StatusKind, message: Option<&str>) {
    match render_status(&kind, message) {
        Some(banner) => {
            tracing::debug!("Showing {:?} banner: {}", banner.kind, banner.text);
            page.show_status(&banner);
        }
        None => page.hide_status(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_banner() {
        let banner = render_status(&StatusKind::Error, Some(ERROR_MESSAGE)).unwrap();
        assert_eq!(banner.css_class, "alert alert-danger");
        assert_eq!(banner.icon_class, "glyphicon glyphicon-exclamation-sign");
        assert_eq!(banner.sr_label, "Error:");
        assert_eq!(banner.text, "Erro a enviar mensagem!");
    }

    #[test]
    fn test_render_success_banner() {
        let banner = render_status(&StatusKind::Success, Some(SUCCESS_MESSAGE)).unwrap();
        assert_eq!(banner.css_class, "alert alert-success");
        assert_eq!(banner.icon_class, "glyphicon glyphicon-ok");
        assert_eq!(banner.sr_label, "Success:");
    }

    #[test]
    fn test_render_info_and_other_kinds() {
        let info = render_status(&StatusKind::Info, Some("a enviar")).unwrap();
        assert_eq!(info.css_class, "alert alert-info");
        assert_eq!(info.icon_class, "glyphicon");
        assert_eq!(info.sr_label, "Info:");

        let other = render_status(&StatusKind::parse("warning"), Some("x")).unwrap();
        assert_eq!(other.css_class, "alert alert-info");
        assert_eq!(other.sr_label, "Warning:");
    }

    #[test]
    fn test_render_without_message_hides() {
        assert!(render_status(&StatusKind::Success, None).is_none());
    }
}
