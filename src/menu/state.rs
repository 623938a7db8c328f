//! A single interactive menu: its node-list, cursor, owner and lifetime.
use super::buttons::{ButtonMap, Jump, Transition};
use crate::constants::{INGREDIENT_WINDOW, MAX_MENU_TTL_SECS, REDELIVERY_WINDOW_MS};
use crate::data::GraphSource;
use crate::error::MenuError;
use serenity::model::id::{ChannelId, MessageId, UserId};
use std::time::{Duration, Instant};

/// One page worth of graph content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Recipe(String),
    Item(String),
}

/// Where a menu is posted, and the command message that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTarget {
    pub channel_id: ChannelId,
    pub trigger: Option<MessageId>,
}

/// The last accepted press and the menu position it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Press {
    user: UserId,
    glyph: String,
    at: Instant,
    position: (u64, usize, usize),
}

#[derive(Debug)]
pub struct Menu {
    message_id: MessageId,
    target: RenderTarget,
    owner: UserId,
    nodes: Vec<Node>,
    page: usize,
    ingredient_cursor: usize,
    buttons: ButtonMap,
    ttl: Duration,
    expiry: Instant,
    disabled: bool,
    permission_note: bool,
    /// Bumped whenever a jump replaces the node-list.
    generation: u64,
    last_press: Option<Press>,
}

impl Menu {
    /// Fails with [`MenuError::EmptyNodeList`] when `nodes` is empty.
    pub fn new(
        graph: &GraphSource,
        message_id: MessageId,
        target: RenderTarget,
        owner: UserId,
        nodes: Vec<Node>,
        ttl: Duration,
        now: Instant,
    ) -> Result<Self, MenuError> {
        let Some(first) = nodes.first() else {
            return Err(MenuError::EmptyNodeList);
        };
        let buttons = ButtonMap::build(graph, first, 0);
        Ok(Self {
            message_id,
            target,
            owner,
            nodes,
            page: 0,
            ingredient_cursor: 0,
            buttons,
            ttl,
            expiry: deadline(now, ttl),
            disabled: false,
            permission_note: false,
            generation: 0,
            last_press: None,
        })
    }

    pub fn message_id(&self) -> MessageId {
        self.message_id
    }

    pub fn target(&self) -> RenderTarget {
        self.target
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn current(&self) -> &Node {
        &self.nodes[self.page]
    }

    pub fn ingredient_cursor(&self) -> usize {
        self.ingredient_cursor
    }

    pub fn buttons(&self) -> &ButtonMap {
        &self.buttons
    }

    pub fn expiry(&self) -> Instant {
        self.expiry
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expiry < now
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub(crate) fn mark_disabled(&mut self) {
        self.disabled = true;
    }

    pub fn permission_note(&self) -> bool {
        self.permission_note
    }

    pub(crate) fn set_permission_note(&mut self, note: bool) {
        self.permission_note = note;
    }

    /// Pushes the expiry to `now + ttl`; never moves it backwards.
    pub fn keep_alive(&mut self, now: Instant) {
        self.expiry = self.expiry.max(deadline(now, self.ttl));
    }

    /// True when `glyph` from `user` repeats the last accepted press within the
    /// redelivery window and the menu has not moved since.
    pub fn is_redelivery(&self, user: UserId, glyph: &str, now: Instant) -> bool {
        self.last_press.as_ref().is_some_and(|press| {
            press.user == user
                && press.glyph == glyph
                && now.saturating_duration_since(press.at)
                    <= Duration::from_millis(REDELIVERY_WINDOW_MS)
                && press.position == self.position()
        })
    }

    /// Remembers an accepted press; call after the transition has been applied.
    pub(crate) fn record_press(&mut self, user: UserId, glyph: &str, now: Instant) {
        self.last_press = Some(Press {
            user,
            glyph: glyph.to_string(),
            at: now,
            position: self.position(),
        });
    }

    fn position(&self) -> (u64, usize, usize) {
        (self.generation, self.page, self.ingredient_cursor)
    }

    /// Applies a transition and recomputes the button table.
    /// Jumps that resolve to nothing leave the node-list untouched.
    pub fn apply(&mut self, graph: &GraphSource, transition: &Transition) {
        let last = self.nodes.len() - 1;
        match transition {
            Transition::First => self.set_page(0),
            Transition::Last => self.set_page(last),
            Transition::Step(delta) => {
                let target = self.page.saturating_add_signed(*delta).min(last);
                self.set_page(target);
            }
            Transition::Jump(jump) => {
                let nodes = jump_nodes(graph, jump);
                if !nodes.is_empty() {
                    self.nodes = nodes;
                    self.generation += 1;
                    self.set_page(0);
                }
            }
            Transition::CycleIngredients => {
                let craftable = match self.current() {
                    Node::Recipe(key) => graph
                        .recipe(key)
                        .map(|r| graph.craftable_ingredients(r).len())
                        .unwrap_or(0),
                    Node::Item(_) => 0,
                };
                let next = self.ingredient_cursor + INGREDIENT_WINDOW;
                self.ingredient_cursor = if next >= craftable { 0 } else { next };
            }
        }
        self.buttons = ButtonMap::build(graph, self.current(), self.ingredient_cursor);
    }

    fn set_page(&mut self, page: usize) {
        self.page = page.min(self.nodes.len() - 1);
        self.ingredient_cursor = 0;
    }
}

/// `now + ttl`, capped so an oversized lifetime cannot overflow the clock.
fn deadline(now: Instant, ttl: Duration) -> Instant {
    now.checked_add(ttl)
        .or_else(|| now.checked_add(Duration::from_secs(MAX_MENU_TTL_SECS)))
        .unwrap_or(now)
}

/// Resolves a jump into a fresh node-list in canonical order.
pub fn jump_nodes(graph: &GraphSource, jump: &Jump) -> Vec<Node> {
    match jump {
        Jump::RecipesProducing(item) => graph
            .recipes_producing(item)
            .into_iter()
            .map(|r| Node::Recipe(r.key.clone()))
            .collect(),
        Jump::RecipesConsuming(item) => graph
            .recipes_consuming(item)
            .into_iter()
            .map(|r| Node::Recipe(r.key.clone()))
            .collect(),
        Jump::Single(node) => vec![node.clone()],
    }
}
