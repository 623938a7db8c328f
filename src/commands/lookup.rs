//! Turns a user query into the initial node-list of a menu.
use crate::data::GraphSource;
use crate::menu::Node;
use crate::menu::buttons::Jump;
use crate::menu::state::jump_nodes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    /// Recipes that produce the matched item.
    Producing,
    /// Recipes that consume the matched item.
    Consuming,
    /// The matching items themselves.
    Items,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupMiss {
    EmptyQuery,
    NoItem(String),
    NoRecipes { item: String, kind: LookupKind },
}

impl LookupMiss {
    pub fn message(&self) -> String {
        match self {
            LookupMiss::EmptyQuery => "Tell me which item to look up.".to_string(),
            LookupMiss::NoItem(query) => format!("No item matches `{query}`."),
            LookupMiss::NoRecipes {
                item,
                kind: LookupKind::Consuming,
            } => format!("**{item}** isn't used in any recipe."),
            LookupMiss::NoRecipes { item, .. } => format!("**{item}** has no recipe."),
        }
    }
}

pub fn nodes_for(
    graph: &GraphSource,
    kind: LookupKind,
    query: &str,
    locale: &str,
) -> Result<Vec<Node>, LookupMiss> {
    if query.trim().is_empty() {
        return Err(LookupMiss::EmptyQuery);
    }
    if kind == LookupKind::Items {
        let nodes: Vec<Node> = graph
            .search_items(query, locale)
            .into_iter()
            .map(|item| Node::Item(item.key.clone()))
            .collect();
        return if nodes.is_empty() {
            Err(LookupMiss::NoItem(query.trim().to_string()))
        } else {
            Ok(nodes)
        };
    }

    let item = graph
        .find_item(query, locale)
        .ok_or_else(|| LookupMiss::NoItem(query.trim().to_string()))?;
    let jump = match kind {
        LookupKind::Consuming => Jump::RecipesConsuming(item.key.clone()),
        _ => Jump::RecipesProducing(item.key.clone()),
    };
    let nodes = jump_nodes(graph, &jump);
    if nodes.is_empty() {
        return Err(LookupMiss::NoRecipes {
            item: item.display_name(locale).to_string(),
            kind,
        });
    }
    Ok(nodes)
}
