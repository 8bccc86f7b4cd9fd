//! Browser glue: fetches the catalog, owns the running game, and projects it
//! into three regions of the page — a status header, a scrollable history
//! feed, and a clickable candidate grid. Rendering is a full rebuild on every
//! state change; with a catalog of a few hundred entries the DOM work is
//! cheap enough that diffing would not pay for itself.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Element, Response, window};

use crate::catalog::{self, Entry};
use crate::game::{self, Action, GameState, Phase};

const CATALOG_URL: &str = "list/list.csv";
const LOAD_FAILURE_MESSAGE: &str = "データの読み込みに失敗しました";

const MODAL_HIDDEN_STYLE: &str = "display:none;";
const MODAL_VISIBLE_STYLE: &str = "position:fixed; inset:0; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:10px; background:rgba(0,0,0,0.55); color:#fff; z-index:50;";

/// Externally hosted artwork keyed by catalog id. Best-effort: a failed image
/// fetch is not an application error and has no fallback.
fn artwork_url(id: u32) -> String {
    format!(
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/{id}.png"
    )
}

/// Everything the running page owns: the read-only catalog plus the current
/// game state value. Replaced wholesale on every dispatched action.
struct App {
    catalog: Vec<Entry>,
    game: GameState,
}

thread_local! {
    static APP_STATE: RefCell<Option<App>> = RefCell::new(None);
}

/// Kick off the one-time catalog fetch. The UI only appears once the fetch
/// succeeds; a failure surfaces a single blocking alert and the game never
/// initializes (no retry path).
pub fn start() -> Result<(), JsValue> {
    spawn_local(async {
        match fetch_catalog(CATALOG_URL).await {
            Ok(text) => {
                let entries = catalog::parse_catalog(&text);
                if init_game(entries).is_err() {
                    alert(LOAD_FAILURE_MESSAGE);
                }
            }
            Err(_) => alert(LOAD_FAILURE_MESSAGE),
        }
    });
    Ok(())
}

fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}

async fn fetch_catalog(url: &str) -> Result<String, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(win.fetch_with_str(url)).await?;
    let resp: Response = resp_value.dyn_into()?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "catalog fetch failed: HTTP {}",
            resp.status()
        )));
    }
    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("catalog body was not text"))
}

fn init_game(entries: Vec<Entry>) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    ensure_scaffold(&doc)?;
    APP_STATE.with(|cell| {
        cell.replace(Some(App {
            catalog: entries,
            game: GameState::new(),
        }))
    });
    render();
    Ok(())
}

/// Build the page scaffold (status header, history feed, candidate grid,
/// game-over modal) and wire its listeners. Reuses an existing scaffold so a
/// repeated `start_game()` call does not stack duplicate listeners.
fn ensure_scaffold(doc: &Document) -> Result<(), JsValue> {
    if doc.get_element_by_id("ks-root").is_some() {
        return Ok(());
    }
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;
    let root = doc.create_element("div")?;
    root.set_id("ks-root");
    root.set_attribute(
        "style",
        "max-width:960px; margin:0 auto; padding:12px; font-family:sans-serif;",
    )?;
    root.set_inner_html(concat!(
        "<div id='ks-status' style='display:flex; align-items:baseline; gap:16px; padding:8px 4px; border-bottom:2px solid #333;'>",
        "<span id='ks-count' style='font-weight:bold;'>0匹</span>",
        "<span>前の名前: <span id='ks-prev-name'>-</span></span>",
        "<span>次の文字: <span id='ks-target-char' style='font-weight:bold;'>全</span></span>",
        "</div>",
        "<div id='ks-history' style='height:180px; overflow-y:auto; padding:4px; border-bottom:1px solid #ddd;'></div>",
        "<div id='ks-candidates' style='display:grid; grid-template-columns:repeat(auto-fill, minmax(96px, 1fr)); gap:8px; margin-top:12px;'></div>",
        "<div id='ks-gameover' style='display:none;'>",
        "<div style='font-size:28px; font-weight:bold;'>ゲームオーバー</div>",
        "<div id='ks-reason'></div>",
        "<div>記録: <span id='ks-score'></span></div>",
        "<button id='ks-restart' style='padding:8px 24px; font-size:16px; cursor:pointer;'>もう一度プレイ</button>",
        "</div>",
    ));
    body.append_child(&root)?;

    // One delegated listener covers every candidate card, including the ones
    // created by later re-renders.
    if let Some(grid) = doc.get_element_by_id("ks-candidates") {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            let Some(target) = evt.target() else { return };
            let Ok(el) = target.dyn_into::<Element>() else {
                return;
            };
            let Ok(Some(card)) = el.closest("[data-id]") else {
                return;
            };
            let Some(id_attr) = card.get_attribute("data-id") else {
                return;
            };
            let Ok(id) = id_attr.parse::<u32>() else { return };
            dispatch(Action::Select(id));
        }) as Box<dyn FnMut(_)>);
        grid.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    if let Some(btn) = doc.get_element_by_id("ks-restart") {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            dispatch(Action::Restart);
        }) as Box<dyn FnMut(_)>);
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Run one action through the reducer and re-render.
fn dispatch(action: Action) {
    APP_STATE.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            app.game = game::reduce(&app.game, &app.catalog, &action);
        }
    });
    render();
}

fn render() {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    APP_STATE.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            render_status(&doc, app);
            render_history(&doc, app);
            render_candidates(&doc, app);
            render_game_over(&doc, app);
        }
    });
}

fn render_status(doc: &Document, app: &App) {
    if let Some(el) = doc.get_element_by_id("ks-count") {
        el.set_text_content(Some(&format!("{}匹", app.game.score())));
    }
    if let Some(el) = doc.get_element_by_id("ks-prev-name") {
        let prev = app.game.last_entry().map(|e| e.name.as_str()).unwrap_or("-");
        el.set_text_content(Some(prev));
    }
    if let Some(el) = doc.get_element_by_id("ks-target-char") {
        let target = match app.game.required_lead {
            Some(lead) => format!("「{lead}」"),
            None if app.game.history.is_empty() => "全".to_string(),
            None => "-".to_string(),
        };
        el.set_text_content(Some(&target));
    }
}

fn render_history(doc: &Document, app: &App) {
    let Some(feed) = doc.get_element_by_id("ks-history") else {
        return;
    };
    if app.game.history.is_empty() {
        feed.set_inner_html(
            "<div style='text-align:center; padding:20px; color:#666;'>なまえを選んでスタート！</div>",
        );
        return;
    }
    let mut html = String::new();
    for (index, entry) in app.game.history.iter().enumerate() {
        html.push_str(&format!(
            "<div style='display:flex; align-items:center; gap:8px; padding:4px 0;'>\
             <img src='{src}' alt='{name}' loading='lazy' style='width:48px; height:48px; object-fit:contain;'>\
             <span style='color:#888;'>{num}.</span><span>{name}</span></div>",
            src = artwork_url(entry.id),
            name = entry.name,
            num = index + 1,
        ));
    }
    feed.set_inner_html(&html);
    // Keep the latest selection in view. Images may still be loading, so this
    // lands close to, not exactly at, the final bottom.
    feed.set_scroll_top(feed.scroll_height());
}

fn render_candidates(doc: &Document, app: &App) {
    let Some(grid) = doc.get_element_by_id("ks-candidates") else {
        return;
    };
    let list = game::candidates(&app.catalog, &app.game);
    if list.is_empty() {
        grid.set_inner_html(
            "<div style='grid-column:1/-1; text-align:center; padding:20px; color:#666;'>候補がいません...</div>",
        );
        return;
    }
    let mut html = String::new();
    for entry in list {
        html.push_str(&format!(
            "<div data-id='{id}' style='border:1px solid #ddd; border-radius:8px; padding:6px; text-align:center; cursor:pointer; background:#fff;'>\
             <img src='{src}' alt='{name}' loading='lazy' style='width:72px; height:72px; object-fit:contain;'>\
             <div style='font-size:13px;'>{name}</div></div>",
            id = entry.id,
            src = artwork_url(entry.id),
            name = entry.name,
        ));
    }
    grid.set_inner_html(&html);
}

fn render_game_over(doc: &Document, app: &App) {
    let Some(modal) = doc.get_element_by_id("ks-gameover") else {
        return;
    };
    match app.game.phase {
        Phase::Over(reason) => {
            if let Some(el) = doc.get_element_by_id("ks-reason") {
                el.set_text_content(Some(reason.message()));
            }
            if let Some(el) = doc.get_element_by_id("ks-score") {
                el.set_text_content(Some(&format!("{}匹", app.game.score())));
            }
            let _ = modal.set_attribute("style", MODAL_VISIBLE_STYLE);
        }
        Phase::Active => {
            let _ = modal.set_attribute("style", MODAL_HIDDEN_STYLE);
        }
    }
}
