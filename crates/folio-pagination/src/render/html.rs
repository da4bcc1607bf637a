use super::{escape_html, Renderer};
use crate::form::PerPageForm;
use crate::links::{LinkKind, LinkSet};
use folio_common_config::RenderSettings;
use folio_common_core::{Result, ResultExt};

/// `<div class="pagination"><ul><li>...</li></ul></div>` markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlRenderer {
    css_class: String,
    stylesheet: Option<String>,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra class on the wrapper `<div>`.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = class.into();
        self
    }

    /// CSS inlined in a `<style>` block ahead of the links.
    pub fn with_stylesheet(mut self, css: impl Into<String>) -> Self {
        self.stylesheet = Some(css.into());
        self
    }

    /// Build from settings, reading the stylesheet file if one is named.
    pub fn from_settings(settings: &RenderSettings) -> Result<Self> {
        let mut renderer = Self::new().with_class(settings.css_class.clone());
        if let Some(path) = &settings.stylesheet {
            let css = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read stylesheet {}", path.display()))?;
            renderer = renderer.with_stylesheet(css);
        }
        Ok(renderer)
    }
}

fn class_attr(base: &str, extra: &str) -> String {
    if extra.trim().is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, escape_html(extra.trim()))
    }
}

impl Renderer for HtmlRenderer {
    fn name(&self) -> &'static str {
        "html"
    }

    fn render_links(&self, links: &LinkSet) -> Result<String> {
        if links.is_empty() {
            return Ok(String::new());
        }

        let mut out = String::new();
        if let Some(css) = &self.stylesheet {
            // Raw CSS: it comes from configuration, not from the request.
            out.push_str(&format!("<style>{css}</style>"));
        }

        out.push_str(&format!(
            "<div class=\"{}\"><ul>",
            class_attr("pagination", &self.css_class)
        ));

        for link in links {
            let href = escape_html(&link.href);
            let label = escape_html(&link.label);
            let item = match link.kind {
                LinkKind::Page => {
                    let li = if link.active { "<li class=\"active\">" } else { "<li>" };
                    format!(
                        "{li}<a class=\"pagination-anchor visible-page-number-{}\" href=\"{href}\">{label}</a></li>",
                        link.page
                    )
                }
                kind => format!(
                    "<li><a class=\"pagination-anchor {}\" href=\"{href}\">{label}</a></li>",
                    kind.as_str()
                ),
            };
            out.push_str(&item);
        }

        out.push_str("</ul></div>");
        Ok(out)
    }

    fn render_form(&self, form: &PerPageForm) -> Result<String> {
        let mut out = format!(
            "<div class=\"{}\"><form",
            class_attr("results-per-page", &form.css_class)
        );
        if let Some(action) = &form.action {
            out.push_str(&format!(" action=\"{}\"", escape_html(action)));
        }
        out.push_str(&format!(" method=\"{}\">", escape_html(&form.method)));

        for field in &form.hidden {
            out.push_str(&format!(
                "<input type=\"hidden\" name=\"{}\" value=\"{}\">",
                escape_html(&field.name),
                escape_html(&field.value)
            ));
        }

        let select = escape_html(&form.select_name);
        if let Some(label) = &form.label {
            out.push_str(&format!(
                "<label for=\"{select}\">{}</label>",
                escape_html(label)
            ));
        }

        out.push_str(&format!("<select name=\"{select}\" id=\"{select}\">"));
        for option in &form.options {
            let selected = if option.selected { " selected=\"selected\"" } else { "" };
            out.push_str(&format!(
                "<option value=\"{rows}\"{selected}>{rows}</option>",
                rows = option.rows
            ));
        }
        out.push_str("</select>");

        if let Some(submit) = &form.submit_text {
            out.push_str(&format!(
                "<input type=\"submit\" value=\"{}\">",
                escape_html(submit)
            ));
        }

        out.push_str("</form></div>");
        Ok(out)
    }
}
