use crate::RBTree;
use crate::node::NodeRef;
use crate::utils::Side;
use core::fmt;
use core::fmt::Write;

/// Escapes double quotes so `Debug` output can be embedded in a quoted graphviz label.
struct Escaped<'a, 'b>(&'a mut fmt::Formatter<'b>);

impl Write for Escaped<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for part in s.split_inclusive('"') {
            match part.strip_suffix('"') {
                Some(head) => {
                    self.0.write_str(head)?;
                    self.0.write_str("\\\"")?;
                }
                None => self.0.write_str(part)?,
            }
        }
        Ok(())
    }
}

/// Graphviz rendering of a [`RBTree`], returned by [`RBTree::dot`].
pub struct Dot<'a, T> {
    pub(crate) tree: &'a RBTree<T>,
}

impl<T> Dot<'_, T>
where
    T: fmt::Debug,
{
    fn node_fmt(&self, f: &mut fmt::Formatter, node: NodeRef) -> fmt::Result {
        let n = &self.tree.pool[node];
        let id = node.index();

        write!(f, r#"{id} [label=""#)?;
        write!(Escaped(&mut *f), "{:?}", n.item())?;
        write!(
            f,
            r#"", style=filled, fillcolor={color}, fontcolor=white];"#,
            color = n.color
        )?;

        let mut print_side = |side: Side| -> fmt::Result {
            let child = n.child(side);
            if child.is_sentinel() {
                return Ok(());
            }

            f.write_fmt(format_args!(
                r#"{id} -> {} [label="{side}"];"#,
                child.index()
            ))?;
            self.node_fmt(f, child)
        };
        print_side(Side::Left)?;
        print_side(Side::Right)
    }
}

impl<T> fmt::Display for Dot<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("digraph {")?;
        if !self.tree.root.is_sentinel() {
            self.node_fmt(f, self.tree.root)?;
        }
        f.write_str("}")
    }
}

impl<T> fmt::Debug for Dot<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
