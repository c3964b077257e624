//! Console banner — styled lines printed to the developer console on load.

pub const TITLE_STYLE: &str = "color: #4fa3e0; font-size: 18px; font-weight: bold;";
pub const CONTACT_STYLE: &str = "color: #ecf0f1; font-size: 14px;";

/// One styled console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerLine {
    pub text: String,
    pub style: &'static str,
}

impl BannerLine {
    /// Format string for `console.log(format, style)`.
    ///
    /// Literal `%` in the text is escaped so the console does not treat it
    /// as a directive.
    #[must_use]
    pub fn console_format(&self) -> String {
        format!("%c{}", self.text.replace('%', "%%"))
    }
}

/// Lines for a banner with a title and an optional contact line.
///
/// Blank titles and contacts are left out.
#[must_use]
pub fn lines(title: &str, contact: Option<&str>) -> Vec<BannerLine> {
    let title = Some(title.trim())
        .filter(|t| !t.is_empty())
        .map(|t| BannerLine {
            text: t.to_string(),
            style: TITLE_STYLE,
        });
    let contact = contact
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(|c| BannerLine {
            text: format!("📧 Contact: {c}"),
            style: CONTACT_STYLE,
        });
    title.into_iter().chain(contact).collect()
}
