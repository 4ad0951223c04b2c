//! Browser tests: `wasm-pack test --headless --firefox frontend`
#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use frontend::components::game_card::{GameCardProps, GameCardView};
use shared::{GameCard, GameRecord, TeamEntry, WinningTeam};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::platform::time::sleep;

wasm_bindgen_test_configure!(run_in_browser);

fn card() -> GameCard {
    let record = GameRecord::new(
        "sim-1",
        TeamEntry::new("Equipo Águila", 2, 312.5),
        TeamEntry::new("Equipo Halcón", 1, 298.0),
    )
    .with_sequence(1)
    .with_winner(WinningTeam::new("Equipo Águila", 312.5));
    GameCard::from_record(&record).unwrap()
}

fn mount() -> web_sys::Element {
    let document = gloo_utils::document();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    yew::Renderer::<GameCardView>::with_root_and_props(root.clone(), GameCardProps { card: card() }).render();
    root
}

fn body_display(root: &web_sys::Element) -> String {
    let body: HtmlElement = root.query_selector(".game-body").unwrap().unwrap().unchecked_into();
    body.style().get_property_value("display").unwrap()
}

#[wasm_bindgen_test]
async fn card_starts_collapsed_and_toggles() {
    let root = mount();
    sleep(Duration::from_millis(10)).await;

    assert_eq!(body_display(&root), "none");
    let title = root.query_selector(".game-number").unwrap().unwrap();
    assert_eq!(title.text_content().unwrap(), "Juego #1");

    let header: HtmlElement = root.query_selector(".game-header").unwrap().unwrap().unchecked_into();
    header.click();
    sleep(Duration::from_millis(10)).await;

    assert_eq!(body_display(&root), "block");
    let icon = root.query_selector(".toggle-icon").unwrap().unwrap();
    assert_eq!(icon.text_content().unwrap(), "▲");
}
