//! Tree-walking evaluation of expression trees.
//!
//! # Design
//!
//! Evaluation walks the arena directly with no intermediate form. Operands
//! are evaluated left to right before the operator is applied, and call
//! arguments are evaluated before the callee is looked up, so
//! `foo(undefined)` reports the undefined variable, not the unknown
//! function.
//!
//! Errors carry the span of the innermost node that failed. A node id the
//! arena does not own is an internal error, never a panic.

use numu_ir::{NodeArena, NodeId, NodeKind};
use numu_stack::ensure_sufficient_stack;
use smallvec::SmallVec;
use tracing::trace;

use crate::environment::Environment;
use crate::errors::{not_implemented, unsupported_node, EvalResult};
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;

/// Evaluates the tree rooted at `id` to a number.
///
/// Assignments write through to `env`; nothing else mutates it.
#[tracing::instrument(level = "debug", skip_all, fields(root = id.raw()))]
pub fn evaluate(arena: &NodeArena, id: NodeId, env: &mut Environment) -> EvalResult {
    Evaluator { arena, env }.eval(id)
}

struct Evaluator<'a> {
    arena: &'a NodeArena,
    env: &'a mut Environment,
}

impl Evaluator<'_> {
    fn eval(&mut self, id: NodeId) -> EvalResult {
        ensure_sufficient_stack(|| {
            let arena = self.arena;
            let node = arena.try_get(id)?;
            self.eval_kind(&node.kind)
                .map_err(|err| err.with_span(node.span))
        })
    }

    fn eval_kind(&mut self, kind: &NodeKind) -> EvalResult {
        match kind {
            NodeKind::Number(value) => Ok(*value),
            NodeKind::Variable(name) => self.env.get_variable(name),
            NodeKind::Binary { op, left, right } => {
                let left = self.eval(*left)?;
                let right = self.eval(*right)?;
                evaluate_binary(*op, left, right)
            }
            NodeKind::Unary { op, operand } => {
                let operand = self.eval(*operand)?;
                evaluate_unary(*op, operand)
            }
            NodeKind::Function { name, args } => {
                let arena = self.arena;
                let args = arena
                    .list(*args)
                    .iter()
                    .map(|&arg| self.eval(arg))
                    .collect::<Result<SmallVec<[f64; 4]>, _>>()?;
                trace!(name = %name, argc = args.len(), "call");
                self.env.call_function(name, &args)
            }
            NodeKind::Assignment { name, value } => {
                let value = self.eval(*value)?;
                self.env.set_variable(name.as_str(), value);
                Ok(value)
            }
            NodeKind::Matrix { .. } => Err(not_implemented("matrix")),
            NodeKind::Tensor { .. } => Err(not_implemented("tensor")),
            NodeKind::Boolean(_)
            | NodeKind::String(_)
            | NodeKind::Block { .. }
            | NodeKind::If { .. }
            | NodeKind::While { .. }
            | NodeKind::For { .. }
            | NodeKind::Return { .. } => Err(unsupported_node(kind.tag())),
        }
    }
}
