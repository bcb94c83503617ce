use super::*;

#[test]
fn binary_fold_covers_only_arithmetic_without_mod() {
    assert_eq!(BinaryOp::Add.fold(2.0, 3.0), Some(5.0));
    assert_eq!(BinaryOp::Sub.fold(8.0, 3.0), Some(5.0));
    assert_eq!(BinaryOp::Mul.fold(2.0, 3.0), Some(6.0));
    assert_eq!(BinaryOp::Div.fold(1.0, 4.0), Some(0.25));
    assert_eq!(BinaryOp::Pow.fold(2.0, 10.0), Some(1024.0));
    assert_eq!(BinaryOp::Div.fold(1.0, 0.0), Some(f64::INFINITY));
    for op in [
        BinaryOp::Mod,
        BinaryOp::Eq,
        BinaryOp::NotEq,
        BinaryOp::Lt,
        BinaryOp::LtEq,
        BinaryOp::Gt,
        BinaryOp::GtEq,
        BinaryOp::And,
        BinaryOp::Or,
    ] {
        assert_eq!(op.fold(1.0, 2.0), None, "{op:?} must not fold");
    }
}

#[test]
fn unary_fold_scalar_ops() {
    assert_eq!(UnaryOp::Negate.fold(4.0), Some(-4.0));
    assert_eq!(UnaryOp::Sqrt.fold(9.0), Some(3.0));
    assert_eq!(UnaryOp::Exp.fold(0.0), Some(1.0));
    assert_eq!(UnaryOp::Log.fold(1.0), Some(0.0));
    assert_eq!(UnaryOp::Cos.fold(0.0), Some(1.0));
    assert_eq!(UnaryOp::Not.fold(1.0), None);
    assert_eq!(UnaryOp::Inverse.fold(2.0), None);
    assert!(UnaryOp::Determinant.is_matrix_op());
}

#[test]
fn symbols() {
    assert_eq!(BinaryOp::Pow.as_symbol(), "^");
    assert_eq!(BinaryOp::Or.as_symbol(), "||");
    assert_eq!(UnaryOp::Negate.as_symbol(), "-");
    assert_eq!(UnaryOp::Sqrt.as_symbol(), "sqrt");
    assert!(BinaryOp::Mod.is_arithmetic());
    assert!(!BinaryOp::Lt.is_arithmetic());
}

#[test]
fn node_kind_debug_is_compact() {
    let kind = NodeKind::Binary {
        op: BinaryOp::Add,
        left: crate::NodeId::new(0),
        right: crate::NodeId::new(1),
    };
    assert_eq!(format!("{kind:?}"), "Binary(Add, NodeId(0), NodeId(1))");
    assert_eq!(format!("{:?}", NodeKind::Number(2.5)), "Number(2.5)");
    assert!(NodeKind::Variable("x".into()).is_leaf());
    assert_eq!(NodeTag::Function.name(), "function call");
}
