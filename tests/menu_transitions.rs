//! Page and node-list transitions of a single menu, independent of any platform.
mod common;

use common::{TTL, fixture_graph};
use recipe_bot::data::GraphSource;
use recipe_bot::error::MenuError;
use recipe_bot::menu::{Action, Jump, Menu, Node, RenderTarget, Transition};
use serenity::model::id::{ChannelId, MessageId, UserId};
use std::time::{Duration, Instant};

fn target() -> RenderTarget {
    RenderTarget {
        channel_id: ChannelId::new(7),
        trigger: None,
    }
}

fn menu_over(graph: &GraphSource, nodes: Vec<Node>, now: Instant) -> Menu {
    Menu::new(
        graph,
        MessageId::new(42),
        target(),
        UserId::new(1),
        nodes,
        TTL,
        now,
    )
    .expect("non-empty node-list")
}

fn stick_menu(graph: &GraphSource, now: Instant) -> Menu {
    let nodes = graph
        .recipes_producing("minecraft:stick")
        .into_iter()
        .map(|r| Node::Recipe(r.key.clone()))
        .collect();
    menu_over(graph, nodes, now)
}

fn press(menu: &mut Menu, graph: &GraphSource, action: Action) {
    let transition = menu
        .buttons()
        .get(action)
        .and_then(|e| e.transition())
        .cloned()
        .unwrap_or_else(|| panic!("{action:?} should be enabled"));
    menu.apply(graph, &transition);
}

#[test]
fn empty_node_list_is_rejected() {
    let graph = fixture_graph();
    let err = Menu::new(
        &graph,
        MessageId::new(1),
        target(),
        UserId::new(1),
        Vec::new(),
        TTL,
        Instant::now(),
    )
    .unwrap_err();
    assert!(matches!(err, MenuError::EmptyNodeList));
}

#[test]
fn forward_ten_clamps_at_the_last_page() {
    let graph = fixture_graph();
    let mut menu = stick_menu(&graph, Instant::now());
    assert_eq!(menu.page_count(), 23);

    press(&mut menu, &graph, Action::Forward10);
    assert_eq!(menu.page(), 10);
    press(&mut menu, &graph, Action::Forward10);
    assert_eq!(menu.page(), 20);
    press(&mut menu, &graph, Action::Forward10);
    assert_eq!(menu.page(), 22);

    press(&mut menu, &graph, Action::First);
    assert_eq!(menu.page(), 0);
    assert_eq!(menu.ingredient_cursor(), 0);
}

#[test]
fn back_ten_clamps_at_zero() {
    let graph = fixture_graph();
    let mut menu = stick_menu(&graph, Instant::now());
    press(&mut menu, &graph, Action::Forward);
    press(&mut menu, &graph, Action::Forward);
    press(&mut menu, &graph, Action::Back10);
    assert_eq!(menu.page(), 0);
    press(&mut menu, &graph, Action::Last);
    assert_eq!(menu.page(), 22);
    press(&mut menu, &graph, Action::Back10);
    assert_eq!(menu.page(), 12);
}

#[test]
fn bounds_are_idempotent_for_every_length() {
    let graph = fixture_graph();
    let all = graph.recipes_producing("minecraft:stick");
    for len in 1..=all.len() {
        let nodes = all[..len]
            .iter()
            .map(|r| Node::Recipe(r.key.clone()))
            .collect();
        let mut menu = menu_over(&graph, nodes, Instant::now());
        press(&mut menu, &graph, Action::Back);
        assert_eq!(menu.page(), 0, "back at page 0 with {len} pages");
        press(&mut menu, &graph, Action::First);
        assert_eq!(menu.page(), 0);
        press(&mut menu, &graph, Action::Last);
        assert_eq!(menu.page(), len - 1);
        press(&mut menu, &graph, Action::Forward);
        assert_eq!(menu.page(), len - 1, "forward at last page with {len} pages");
    }
}

#[test]
fn forward_then_back_nets_to_no_op() {
    let graph = fixture_graph();
    let mut menu = stick_menu(&graph, Instant::now());
    press(&mut menu, &graph, Action::Forward10);
    let before = menu.page();
    press(&mut menu, &graph, Action::Forward);
    press(&mut menu, &graph, Action::Back);
    assert_eq!(menu.page(), before);
}

#[test]
fn keep_alive_never_moves_expiry_backwards() {
    let graph = fixture_graph();
    let start = Instant::now();
    let mut menu = stick_menu(&graph, start);
    assert_eq!(menu.expiry(), start + TTL);

    let mut last = menu.expiry();
    for offset in [5u64, 3, 100, 1, 0, 400] {
        menu.keep_alive(start + Duration::from_secs(offset));
        assert!(menu.expiry() >= last);
        last = menu.expiry();
    }
    assert_eq!(menu.expiry(), start + Duration::from_secs(400) + TTL);
}

#[test]
fn expiry_is_strictly_before_now() {
    let graph = fixture_graph();
    let start = Instant::now();
    let menu = stick_menu(&graph, start);
    assert!(!menu.is_expired(start + TTL));
    assert!(menu.is_expired(start + TTL + Duration::from_millis(1)));
}

#[test]
fn ingredient_jump_replaces_node_list_and_resets_page() {
    let graph = fixture_graph();
    let mut menu = stick_menu(&graph, Instant::now());
    press(&mut menu, &graph, Action::Forward);
    // Page 1 is a filler recipe made from oak logs, which cannot be crafted.
    assert!(!menu.buttons().get(Action::Ingredient(0)).unwrap().is_enabled());

    press(&mut menu, &graph, Action::First);
    press(&mut menu, &graph, Action::Ingredient(0));
    assert_eq!(menu.page(), 0);
    assert_eq!(
        menu.nodes(),
        &[Node::Recipe("minecraft:oak_planks".to_string())]
    );
}

#[test]
fn output_usage_jumps_to_consuming_recipes() {
    let graph = fixture_graph();
    let mut menu = stick_menu(&graph, Instant::now());
    press(&mut menu, &graph, Action::Last);
    press(&mut menu, &graph, Action::OutputUsage);
    assert_eq!(menu.page(), 0);
    assert_eq!(menu.nodes(), &[Node::Recipe("minecraft:ladder".to_string())]);
    // A ladder is not used in anything.
    assert!(!menu.buttons().get(Action::OutputUsage).unwrap().is_enabled());
}

#[test]
fn table_jump_shows_the_station_recipe_then_disables() {
    let graph = fixture_graph();
    let mut menu = stick_menu(&graph, Instant::now());
    press(&mut menu, &graph, Action::Table);
    assert_eq!(
        menu.nodes(),
        &[Node::Recipe("minecraft:crafting_table".to_string())]
    );
    assert!(!menu.buttons().get(Action::Table).unwrap().is_enabled());
}

#[test]
fn table_falls_back_to_the_station_item() {
    let graph = fixture_graph();
    let mut menu = menu_over(
        &graph,
        vec![Node::Recipe("synthetic:water_bottle".to_string())],
        Instant::now(),
    );
    press(&mut menu, &graph, Action::Table);
    assert_eq!(
        menu.nodes(),
        &[Node::Item("minecraft:brewing_stand".to_string())]
    );
}

#[test]
fn empty_jump_leaves_the_menu_untouched() {
    let graph = fixture_graph();
    let mut menu = stick_menu(&graph, Instant::now());
    press(&mut menu, &graph, Action::Forward);
    let nodes = menu.nodes().to_vec();
    menu.apply(
        &graph,
        &Transition::Jump(Jump::RecipesProducing("minecraft:cobblestone".to_string())),
    );
    assert_eq!(menu.nodes(), nodes.as_slice());
    assert_eq!(menu.page(), 1);
}

#[test]
fn oversized_lifetime_saturates_instead_of_overflowing() {
    let graph = fixture_graph();
    let now = Instant::now();
    let mut menu = Menu::new(
        &graph,
        MessageId::new(43),
        target(),
        UserId::new(1),
        vec![Node::Item("minecraft:stick".to_string())],
        Duration::MAX,
        now,
    )
    .expect("non-empty node-list");
    assert!(menu.expiry() > now);
    assert!(!menu.is_expired(now + Duration::from_secs(3600)));

    let before = menu.expiry();
    menu.keep_alive(now + Duration::from_secs(5));
    assert!(menu.expiry() >= before);
}
