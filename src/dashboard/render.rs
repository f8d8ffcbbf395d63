use maud::{html, Markup};

use super::{ArticleCard, DashboardView, ViewState};
use crate::html::{page, AutoRefresh};
use crate::notifier::Toast;
use crate::types::Category;

const TITLE: &str = "Новостная панель";

/// Re-render of an already displayed dashboard; unlike `/news` it does not
/// start another load.
pub const POLL_PATH: &str = "/news?poll=true";

/// Renders the whole dashboard page for the current state, with `toasts`
/// shown above the content.
pub fn render_dashboard(state: &ViewState, toasts: &[Toast]) -> Markup {
    let view = DashboardView::from_state(state);
    let refresh = (state.is_busy() || view == DashboardView::Loading).then_some(AutoRefresh {
        secs: 1,
        url: POLL_PATH,
    });

    let body = html! {
        main class="container" {
            (header(state))
            (toast_list(toasts))
            @match &view {
                DashboardView::Loading => {
                    div class="loading" {
                        div class="spinner" {}
                        p class="muted" style="text-align:center" { "Загрузка новостей..." }
                    }
                }
                DashboardView::Empty => {
                    (empty_state(state))
                }
                DashboardView::Articles(cards) => {
                    section class="grid" {
                        @for card in cards {
                            (article_card(card))
                        }
                    }
                }
            }
        }
    };

    page(TITLE, refresh, body)
}

fn refresh_button(action: &str, label: &str, fetching: bool) -> Markup {
    html! {
        form method="post" action=(action) style="display:inline" {
            button class="btn" type="submit" disabled[fetching] { (label) }
        }
    }
}

fn header(state: &ViewState) -> Markup {
    let fetching = state.is_fetching();
    let label = if fetching { "Загрузка..." } else { "Обновить новости" };

    html! {
        header style="padding:2rem 0" {
            h1 { (TITLE) }
            p class="muted" { "Свежие новости с публикацией в Telegram-канал" }
            (refresh_button("/news/refresh", label, fetching))
            nav class="categories" style="margin-top:1rem;display:flex;flex-wrap:wrap;gap:.5rem" {
                @for category in Category::ALL {
                    (refresh_button(
                        &format!("/news/refresh/{}", category.slug()),
                        category.display_name(),
                        fetching,
                    ))
                }
            }
        }
    }
}

fn toast_list(toasts: &[Toast]) -> Markup {
    html! {
        @if !toasts.is_empty() {
            section class="toasts" role="status" {
                @for toast in toasts {
                    div.toast.destructive[toast.is_destructive()] {
                        strong { (toast.title) }
                        div { (toast.description) }
                    }
                }
            }
        }
    }
}

fn empty_state(state: &ViewState) -> Markup {
    html! {
        section class="empty card" {
            div class="card-body" style="text-align:center" {
                h2 { "Новостей пока нет" }
                p class="muted" { "Загрузите свежие новости из источников" }
                (refresh_button("/news/refresh", "Загрузить новости", state.is_fetching()))
            }
        }
    }
}

fn article_card(card: &ArticleCard) -> Markup {
    html! {
        article class="card" data-id=(card.id) {
            @if let Some(image) = &card.image_url {
                img src=(image) alt=(card.title) loading="lazy"
                    style="width:100%;height:12rem;object-fit:cover"
                    onerror="this.style.display='none'";
            }
            div class="card-body" {
                div class="muted meta" {
                    time { (card.published) }
                    @if let Some(source) = &card.source {
                        " · "
                        span class="source" { (source) }
                    }
                }
                h3 { (card.title) }
                @if let Some(description) = &card.description {
                    p class="muted" { (description) }
                }
                @if let Some(url) = &card.url {
                    a class="btn btn-outline" href=(url) target="_blank" rel="noopener noreferrer" { "Читать" }
                }
                form method="post" action={ "/news/telegram/" (card.id) } style="display:inline" {
                    button class=(card.action.css_class()) type="submit" disabled[card.action.disabled()] {
                        (card.action.label())
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewsItem;

    fn item(id: i64) -> NewsItem {
        NewsItem {
            id,
            title: format!("Новость <{id}>"),
            description: Some("Короткое описание".into()),
            content: None,
            source: None,
            url: format!("https://example.com/{id}?a=1&b=2"),
            image_url: None,
            published_at: None,
            created_at: None,
            telegram_posted: false,
        }
    }

    fn render(state: &ViewState, toasts: &[Toast]) -> String {
        render_dashboard(state, toasts).into_string()
    }

    #[test]
    fn loading_state_shows_spinner_and_polls() {
        let html = render(&ViewState::default(), &[]);
        assert!(html.contains("class=\"spinner\""));
        assert!(html.contains("url=/news?poll=true"));
        assert!(!html.contains("<article"));
    }

    #[test]
    fn empty_state_has_call_to_action() {
        let html = render(&ViewState::loaded(Vec::new()), &[]);
        assert!(html.contains("Новостей пока нет"));
        assert!(html.contains("Загрузить новости"));
        assert!(!html.contains("class=\"spinner\""));
        assert!(!html.contains("http-equiv"));
    }

    #[test]
    fn cards_escape_content_and_show_placeholders() {
        let html = render(&ViewState::loaded(vec![item(1)]), &[]);
        assert!(html.contains("Новость &lt;1&gt;"));
        assert!(!html.contains("Новость <1>"));
        assert!(html.contains("https://example.com/1?a=1&amp;b=2"));
        assert!(html.contains("Дата не указана"));
        assert!(!html.contains("class=\"source\""));
        assert!(!html.contains("<img"));
        assert!(html.contains("action=\"/news/telegram/1\""));
    }

    #[test]
    fn script_links_are_not_rendered() {
        let mut hostile = item(2);
        hostile.url = "javascript:alert(document.cookie)".into();
        hostile.image_url = Some("javascript:alert(1)".into());

        let html = render(&ViewState::loaded(vec![hostile]), &[]);
        assert!(!html.contains("javascript:"));
        assert!(!html.contains("Читать"));
        assert!(!html.contains("<img"));
        assert!(html.contains("action=\"/news/telegram/2\""));
    }

    #[test]
    fn image_error_handler_only_hides_the_image() {
        let mut with_image = item(1);
        with_image.image_url = Some("https://cdn.example.com/1.jpg".into());
        with_image.source = Some("Интерфакс".into());

        let html = render(&ViewState::loaded(vec![with_image]), &[]);
        let img = &html[html.find("<img").unwrap()..];
        let img = &img[..img.find('>').unwrap()];
        assert!(img.contains("onerror=\"this.style.display='none'\""));
        assert_eq!(html.matches("onerror").count(), 1);
        assert!(html.contains("Интерфакс"));
        assert!(html.contains("<h3>"));
    }

    #[test]
    fn publish_button_reflects_state() {
        let mut posted = item(9);
        posted.telegram_posted = true;
        let state = ViewState::loaded(vec![posted, item(42)]).with_posting(42);

        let html = render(&state, &[]);
        assert!(html.contains(">Опубликовано</button>"));
        assert!(html.contains(">Публикация...</button>"));
        assert_eq!(html.matches(" disabled>").count(), 2);
        assert!(html.contains("http-equiv"));
    }

    #[test]
    fn toasts_are_rendered() {
        let toasts = [
            Toast::success("Готово", "Добавлено новостей: 3"),
            Toast::failure("Ошибка", "Не удалось получить новости <b>"),
        ];
        let html = render(&ViewState::loaded(Vec::new()), &toasts);
        assert!(html.contains("Добавлено новостей: 3"));
        assert!(html.contains("toast destructive"));
        assert!(html.contains("&lt;b&gt;"));
    }
}
