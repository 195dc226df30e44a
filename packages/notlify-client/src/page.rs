use crate::state::UiState;
use askama::Template;

#[derive(Template)]
#[template(path = "banner.html")]
pub struct BannerTemplate<'a> {
    pub kind: &'static str,
    pub visible: bool,
    pub message: &'a str,
}

#[derive(Template)]
#[template(path = "loading.html")]
pub struct LoadingTemplate {
    pub loading: bool,
}

/// Banner, loading indicator and list container, ready to be dropped into
/// the host document. `list_html` is already escaped template output.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    pub kind: &'static str,
    pub visible: bool,
    pub message: &'a str,
    pub loading: bool,
    pub list_html: &'a str,
}

pub fn render_banner(state: &UiState) -> askama::Result<String> {
    BannerTemplate {
        kind: state.banner.kind.as_str(),
        visible: state.banner.visible,
        message: &state.banner.message,
    }
    .render()
}

pub fn render_loading(state: &UiState) -> askama::Result<String> {
    LoadingTemplate {
        loading: state.loading,
    }
    .render()
}

pub fn render_page(state: &UiState) -> askama::Result<String> {
    PageTemplate {
        kind: state.banner.kind.as_str(),
        visible: state.banner.visible,
        message: &state.banner.message,
        loading: state.loading,
        list_html: &state.list_html,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::BannerKind;

    #[test]
    fn test_banner_message_is_escaped() {
        let mut state = UiState::default();
        state.banner.show("Invalid <email> & \"name\"", BannerKind::Error);

        assert_eq!(
            render_banner(&state).unwrap().trim(),
            r#"<div id="notification" class="notification error show">Invalid &lt;email&gt; &amp; &quot;name&quot;</div>"#
        );
    }

    #[test]
    fn test_hidden_banner_and_loading() {
        let state = UiState::default();
        assert_eq!(
            render_banner(&state).unwrap().trim(),
            r#"<div id="notification" class="notification success"></div>"#
        );
        assert_eq!(
            render_loading(&state).unwrap().trim(),
            r#"<div id="loading" class="loading"></div>"#
        );
    }

    #[test]
    fn test_render_page_includes_list() {
        let mut state = UiState::default();
        state.loading = true;
        state.banner.show("<b>oops</b>", BannerKind::Error);
        state.list_html = "<p>items</p>".to_string();

        let page = render_page(&state).unwrap();
        assert!(page.contains(r#"class="loading show""#));
        assert!(page.contains("&lt;b&gt;oops"));
        assert!(!page.contains("<b>"));
        assert!(page.contains("<div id=\"notifications-list\">\n<p>items</p>\n</div>"));
    }
}
