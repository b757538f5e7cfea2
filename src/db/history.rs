/*!
A database of histories, stored as an arena of path nodes.

Each node records an observation at some time, together with the event (if any) whose firing produced the observation, and a key to its parent node.
A [QuasiModel] is a key to a leaf node, and the history of the quasi-model is the path from the leaf back through the parent keys to some root.

As histories only ever grow by appending, two quasi-models which branch from a common node share every node up to and including the branch point.
So, branching is one insertion per successor, rather than a copy of the path.

Nodes keep a count of their children, and [pruning](HistoryDB::prune) a quasi-model removes its leaf together with each ancestor left without children.
Any node in the database, then, is on the history of some live quasi-model.

```rust
# use otter_acts::db::history::HistoryDB;
# use otter_acts::structures::names::Fluent;
# use otter_acts::structures::observation::Observation;
# use otter_acts::structures::timepoint::Event;
let before = Observation::all_false(&[Fluent::from("sent")]);
let after = before.merge([(Fluent::from("sent"), true)]).unwrap();

let mut history_db = HistoryDB::default();
let root = history_db.root(1, before.clone());
let left = history_db.extend(root, 2, after, Event::new("send", None));
let right = history_db.extend(root, 2, before, Event::new("send", None));
assert_eq!(history_db.len(), 3);

history_db.prune(left);
assert_eq!(history_db.len(), 2);

history_db.prune(right);
assert!(history_db.is_empty());
```
*/

use slotmap::SlotMap;

use crate::{
    misc::log::targets,
    structures::{
        observation::Observation,
        timepoint::{Event, Time},
    },
};

slotmap::new_key_type! {
    /// A key to a node of the history database.
    pub struct NodeKey;
}

/// An entry on a path.
#[derive(Clone, Debug)]
pub struct Node {
    parent: Option<NodeKey>,
    children: usize,
    time: Time,
    observation: Observation,
    firing: Option<Event>,
}

impl Node {
    pub fn time(&self) -> Time {
        self.time
    }

    pub fn observation(&self) -> &Observation {
        &self.observation
    }

    /// The event whose firing produced the observation of the node, or nothing for a root.
    pub fn firing(&self) -> Option<&Event> {
        self.firing.as_ref()
    }

    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }
}

/// A candidate history, identified by the leaf of its path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QuasiModel {
    leaf: NodeKey,
}

impl QuasiModel {
    pub fn leaf(&self) -> NodeKey {
        self.leaf
    }
}

#[derive(Default)]
pub struct HistoryDB {
    nodes: SlotMap<NodeKey, Node>,
}

impl HistoryDB {
    /// A fresh quasi-model whose history is the single entry (`time`, `observation`).
    pub fn root(&mut self, time: Time, observation: Observation) -> QuasiModel {
        let leaf = self.nodes.insert(Node {
            parent: None,
            children: 0,
            time,
            observation,
            firing: None,
        });
        QuasiModel { leaf }
    }

    /// A quasi-model whose history is the history of `model` extended with (`time`, `observation`), as produced by `firing`.
    ///
    /// `model` is then internal to the returned quasi-model, and should not be extended or pruned further as a quasi-model.
    pub fn extend(
        &mut self,
        model: QuasiModel,
        time: Time,
        observation: Observation,
        firing: Event,
    ) -> QuasiModel {
        if let Some(parent) = self.nodes.get_mut(model.leaf) {
            parent.children += 1;
        }

        let leaf = self.nodes.insert(Node {
            parent: Some(model.leaf),
            children: 0,
            time,
            observation,
            firing: Some(firing),
        });
        QuasiModel { leaf }
    }

    /// Removes `model`, together with any part of its history not shared with some other quasi-model.
    pub fn prune(&mut self, model: QuasiModel) {
        let mut key = Some(model.leaf);
        let mut removed = 0;

        while let Some(current) = key {
            let Some(node) = self.nodes.get(current) else {
                break;
            };
            if node.children > 0 {
                break;
            }

            let parent = node.parent;
            self.nodes.remove(current);
            removed += 1;

            if let Some(parent_key) = parent {
                if let Some(parent_node) = self.nodes.get_mut(parent_key) {
                    parent_node.children = parent_node.children.saturating_sub(1);
                }
            }
            key = parent;
        }

        log::trace!(target: targets::HISTORY, "Pruned {removed} node(s), {} remain", self.nodes.len());
    }

    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// The final entry of the history of `model`.
    pub fn latest(&self, model: QuasiModel) -> Option<&Node> {
        self.nodes.get(model.leaf)
    }

    /// The entries of the history of `model`, from the latest back to the root.
    pub fn ancestry(&self, model: QuasiModel) -> impl Iterator<Item = &Node> {
        std::iter::successors(self.nodes.get(model.leaf), |node| {
            node.parent.and_then(|parent| self.nodes.get(parent))
        })
    }

    /// The entries of the history of `model`, from the root to the latest.
    pub fn path(&self, model: QuasiModel) -> Vec<&Node> {
        let mut path = self.ancestry(model).collect::<Vec<_>>();
        path.reverse();
        path
    }

    /// The latest entry of the history of `model` at or before `time`, if any.
    pub fn latest_at_or_before(&self, model: QuasiModel, time: Time) -> Option<&Node> {
        self.ancestry(model).find(|node| node.time <= time)
    }

    /// The entry preceding `node` on its path, if any.
    pub fn predecessor(&self, node: &Node) -> Option<&Node> {
        node.parent.and_then(|parent| self.nodes.get(parent))
    }

    /// A count of nodes, across all histories.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
