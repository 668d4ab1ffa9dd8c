//! The channel's rich-text subset: bold, italic, underline, strike, link.
//!
//! Everything user-provided goes through `escape` so titles containing `<`,
//! `>` or `&` cannot break the surrounding markup.

pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn bold(text: &str) -> String {
    format!("<b>{}</b>", escape(text))
}

pub fn italic(text: &str) -> String {
    format!("<i>{}</i>", escape(text))
}

pub fn underline(text: &str) -> String {
    format!("<u>{}</u>", escape(text))
}

pub fn strike(text: &str) -> String {
    format!("<s>{}</s>", escape(text))
}

pub fn link(text: &str, url: &str) -> String {
    format!("<a href=\"{}\">{}</a>", url, escape(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape("Rock & <Roll>"), "Rock &amp; &lt;Roll&gt;");
    }

    #[test]
    fn wraps_in_tags() {
        assert_eq!(bold("SOIRÉE"), "<b>SOIRÉE</b>");
        assert_eq!(italic("doors"), "<i>doors</i>");
        assert_eq!(underline("21h"), "<u>21h</u>");
        assert_eq!(strike("complet"), "<s>complet</s>");
        assert_eq!(
            link("billets", "https://example.org"),
            "<a href=\"https://example.org\">billets</a>"
        );
    }
}
