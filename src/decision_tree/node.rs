//! Defines the inner representation
//! of the Decision Tree class.
use crate::sample::{Value, Label};
use super::question::Question;


/// Enumeration of `SplitNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A node that have two childrens.
    Split(SplitNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the split nodes of decision tree.
/// Each `SplitNode` must have two childrens
#[derive(Debug, Clone, PartialEq)]
pub struct SplitNode {
    pub(super) question: Question,
    pub(super) yes: Box<Node>,
    pub(super) no: Box<Node>,
}


impl SplitNode {
    /// Returns the `SplitNode` from the given components.
    #[inline]
    pub(super) fn from_raw(
        question: Question,
        yes: Box<Node>,
        no: Box<Node>,
    ) -> Self
    {
        Self { question, yes, no, }
    }


    /// Returns the question asked at this node.
    #[inline]
    pub fn question(&self) -> &Question {
        &self.question
    }


    /// Returns the subtree for the rows answering "yes".
    #[inline]
    pub fn yes(&self) -> &Node {
        &self.yes
    }


    /// Returns the subtree for the rows answering "no".
    #[inline]
    pub fn no(&self) -> &Node {
        &self.no
    }
}


/// Represents the leaf nodes of decision tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    pub(super) label: Label,
}


impl LeafNode {
    /// Returns a `LeafNode` that predicts the label
    /// given to this function.
    #[inline]
    pub(super) fn from_raw(label: Label) -> Self {
        Self { label }
    }


    /// Returns the label predicted by this leaf.
    #[inline]
    pub fn label(&self) -> &Label {
        &self.label
    }
}


impl Node {
    /// Construct a leaf node.
    #[inline]
    pub(super) fn leaf(label: Label) -> Self {
        Node::Leaf(LeafNode::from_raw(label))
    }


    /// Construct a split node.
    #[inline]
    pub(super) fn split(question: Question, yes: Node, no: Node) -> Self {
        let node = SplitNode::from_raw(
            question,
            Box::new(yes),
            Box::new(no),
        );
        Node::Split(node)
    }


    /// Returns `true` if `self` is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        match self {
            Node::Split(_) => false,
            Node::Leaf(_) => true,
        }
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        match self {
            Node::Split(ref node) => node.yes.leaves() + node.no.leaves(),
            Node::Leaf(_) => 1_usize
        }
    }


    /// Returns the number of edges on the longest path
    /// from this node to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Node::Split(ref node) => {
                1 + node.yes.depth().max(node.no.depth())
            },
            Node::Leaf(_) => 0_usize
        }
    }


    /// Walk down from `self` to the leaf `row` falls in,
    /// and returns its label.
    #[inline]
    pub(super) fn predict(&self, row: &[Value]) -> &Label {
        let mut node = self;
        loop {
            match node {
                Node::Split(ref split) => {
                    node = if split.question.check_row(row) {
                        &*split.yes
                    } else {
                        &*split.no
                    };
                },
                Node::Leaf(ref leaf) => { return &leaf.label; },
            }
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Split(s) => {
                let s_info = format!(
                    "\tnode_{id} [ label = \"{q} ?\" ];\n",
                    q = escape(&s.question.to_string()),
                );

                let (y_info, next_id) = s.yes.to_dot_info(id + 1);
                let (mut n_info, ret_id) = s.no.to_dot_info(next_id);

                let mut info = y_info;
                info.push(s_info);
                info.append(&mut n_info);

                let y_edge = format!(
                    "\tnode_{id} -- node_{y_id} [ label = \"Yes\" ];\n",
                    y_id = id + 1
                );
                let n_edge = format!(
                    "\tnode_{id} -- node_{n_id} [ label = \"No\" ];\n",
                    n_id = next_id
                );

                info.push(y_edge);
                info.push(n_edge);

                (info, ret_id)
            },
            Node::Leaf(l) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{p}\", \
                     shape = box, \
                     ];\n",
                    p = escape(&l.label.to_string())
                );

                (vec![info], id + 1)
            }
        }
    }
}


/// Escape double quotes for a Graphviz label.
#[inline]
fn escape(text: &str) -> String {
    text.replace('"', "\\\"")
}
