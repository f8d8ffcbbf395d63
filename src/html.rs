//! Document shell shared by the server-rendered pages.

use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body{margin:0;font-family:system-ui,sans-serif;color:#0f172a;background:#fff}
.container{max-width:1200px;margin:0 auto;padding:0 1rem}
.grid{display:grid;gap:1.5rem;grid-template-columns:repeat(auto-fill,minmax(260px,1fr))}
.card{border-radius:.75rem;box-shadow:0 10px 25px rgba(0,0,0,.08);overflow:hidden;background:#fff}
.card-body{padding:1.5rem}
.btn{display:inline-flex;align-items:center;gap:.5rem;padding:.6rem 1.2rem;border-radius:.5rem;border:1px solid #2563eb;background:#2563eb;color:#fff;text-decoration:none;cursor:pointer;font-size:1rem}
.btn-outline{background:transparent;color:#2563eb}
.btn[disabled]{opacity:.6;cursor:not-allowed}
.muted{color:#64748b}
.toast{padding:1rem;border-radius:.5rem;margin:.5rem 0;background:#f1f5f9}
.toast.destructive{background:#fee2e2;color:#991b1b}
.spinner{width:3rem;height:3rem;margin:4rem auto;border:4px solid #e2e8f0;border-top-color:#2563eb;border-radius:50%;animation:spin 1s linear infinite}
@keyframes spin{to{transform:rotate(360deg)}}
"#;

/// Makes the browser re-request `url` on its own after `secs`, which is
/// how pending operations become visible once they settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoRefresh {
    pub secs: u32,
    pub url: &'static str,
}

/// Wraps `body` in a complete HTML document.
pub fn page(title: &str, refresh: Option<AutoRefresh>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ru" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                @if let Some(refresh) = refresh {
                    meta http-equiv="refresh" content={ (refresh.secs) "; url=" (refresh.url) };
                }
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body { (body) }
        }
    }
}
