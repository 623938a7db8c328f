//! The button table of a menu page: which glyphs exist and what each one does.
//!
//! Entries are plain data (`Enabled(Transition)` or `Disabled`) so the table can be
//! built and inspected without any rendering or platform access.
use super::state::Node;
use crate::constants::{INGREDIENT_WINDOW, PAGE_JUMP};
use crate::data::GraphSource;
use crate::ui::style::{
    GLYPH_BACK, GLYPH_BACK_10, GLYPH_FIRST, GLYPH_FORWARD, GLYPH_FORWARD_10, GLYPH_INGREDIENTS,
    GLYPH_LAST, GLYPH_MORE, GLYPH_PLACEHOLDER, GLYPH_TABLE, GLYPH_USAGE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    First,
    Back10,
    Back,
    Forward,
    Forward10,
    Last,
    Table,
    OutputUsage,
    /// Slot within the visible ingredient window (0..INGREDIENT_WINDOW).
    Ingredient(usize),
    More,
}

impl Action {
    pub fn glyph(&self) -> &'static str {
        match self {
            Action::First => GLYPH_FIRST,
            Action::Back10 => GLYPH_BACK_10,
            Action::Back => GLYPH_BACK,
            Action::Forward => GLYPH_FORWARD,
            Action::Forward10 => GLYPH_FORWARD_10,
            Action::Last => GLYPH_LAST,
            Action::Table => GLYPH_TABLE,
            Action::OutputUsage => GLYPH_USAGE,
            Action::Ingredient(slot) => GLYPH_INGREDIENTS[*slot % GLYPH_INGREDIENTS.len()],
            Action::More => GLYPH_MORE,
        }
    }
}

/// A graph query whose result replaces the node-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Jump {
    RecipesProducing(String),
    RecipesConsuming(String),
    Single(Node),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    First,
    Last,
    /// Relative page move, clamped to the node-list bounds.
    Step(isize),
    Jump(Jump),
    CycleIngredients,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionState {
    Enabled(Transition),
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionEntry {
    pub action: Action,
    pub state: ActionState,
}

impl ActionEntry {
    fn enabled(action: Action, transition: Transition) -> Self {
        Self {
            action,
            state: ActionState::Enabled(transition),
        }
    }

    fn disabled(action: Action) -> Self {
        Self {
            action,
            state: ActionState::Disabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self.state, ActionState::Enabled(_))
    }

    pub fn transition(&self) -> Option<&Transition> {
        match &self.state {
            ActionState::Enabled(t) => Some(t),
            ActionState::Disabled => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonMap {
    entries: Vec<ActionEntry>,
}

impl ButtonMap {
    /// Builds the table for `node` with the ingredient window starting at `cursor`.
    pub fn build(graph: &GraphSource, node: &Node, cursor: usize) -> Self {
        let step = PAGE_JUMP as isize;
        let mut entries = vec![
            ActionEntry::enabled(Action::First, Transition::First),
            ActionEntry::enabled(Action::Back10, Transition::Step(-step)),
            ActionEntry::enabled(Action::Back, Transition::Step(-1)),
            ActionEntry::enabled(Action::Forward, Transition::Step(1)),
            ActionEntry::enabled(Action::Forward10, Transition::Step(step)),
            ActionEntry::enabled(Action::Last, Transition::Last),
        ];

        entries.push(match table_node(graph, node) {
            Some(context) if context != *node => {
                ActionEntry::enabled(Action::Table, Transition::Jump(Jump::Single(context)))
            }
            _ => ActionEntry::disabled(Action::Table),
        });

        entries.push(match usage_item(graph, node) {
            Some(item) if graph.has_consumers(item) => ActionEntry::enabled(
                Action::OutputUsage,
                Transition::Jump(Jump::RecipesConsuming(item.to_string())),
            ),
            _ => ActionEntry::disabled(Action::OutputUsage),
        });

        let craftable = match node {
            Node::Recipe(key) => graph
                .recipe(key)
                .map(|r| graph.craftable_ingredients(r))
                .unwrap_or_default(),
            Node::Item(_) => Vec::new(),
        };
        let window_start = if cursor < craftable.len() { cursor } else { 0 };
        for slot in 0..INGREDIENT_WINDOW {
            entries.push(match craftable.get(window_start + slot) {
                Some(item) => ActionEntry::enabled(
                    Action::Ingredient(slot),
                    Transition::Jump(Jump::RecipesProducing(item.to_string())),
                ),
                None => ActionEntry::disabled(Action::Ingredient(slot)),
            });
        }
        entries.push(if craftable.len() > INGREDIENT_WINDOW {
            ActionEntry::enabled(Action::More, Transition::CycleIngredients)
        } else {
            ActionEntry::disabled(Action::More)
        });

        Self { entries }
    }

    pub fn entries(&self) -> &[ActionEntry] {
        &self.entries
    }

    pub fn get(&self, action: Action) -> Option<&ActionEntry> {
        self.entries.iter().find(|e| e.action == action)
    }

    /// Matches an inbound glyph against every entry, disabled ones included.
    pub fn find(&self, glyph: &str) -> Option<&ActionEntry> {
        self.entries.iter().find(|e| e.action.glyph() == glyph)
    }

    /// The reactions to offer: enabled glyphs in table order, with one placeholder
    /// standing in at the position of the first disabled entry.
    pub fn glyphs(&self) -> Vec<&'static str> {
        let mut out = Vec::with_capacity(self.entries.len());
        let mut placeholder = false;
        for entry in &self.entries {
            if entry.is_enabled() {
                out.push(entry.action.glyph());
            } else if !placeholder {
                placeholder = true;
                out.push(GLYPH_PLACEHOLDER);
            }
        }
        out
    }

    /// Item targets of the visible ingredient slots, by slot.
    pub fn ingredient_targets(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries.iter().filter_map(|e| match (&e.action, &e.state) {
            (
                Action::Ingredient(slot),
                ActionState::Enabled(Transition::Jump(Jump::RecipesProducing(item))),
            ) => Some((*slot, item.as_str())),
            _ => None,
        })
    }
}

/// The crafting-station node for a recipe: the station's first recipe, or the station
/// item itself when it cannot be crafted.
pub fn table_node(graph: &GraphSource, node: &Node) -> Option<Node> {
    let Node::Recipe(key) = node else {
        return None;
    };
    let station = graph.recipe(key)?.kind.station()?;
    match graph.recipes_producing(station).first() {
        Some(recipe) => Some(Node::Recipe(recipe.key.clone())),
        None => graph
            .item(station)
            .map(|item| Node::Item(item.key.clone())),
    }
}

fn usage_item<'a>(graph: &'a GraphSource, node: &'a Node) -> Option<&'a str> {
    match node {
        Node::Recipe(key) => graph.recipe(key).map(|r| r.result.as_str()),
        Node::Item(key) => Some(key.as_str()),
    }
}
