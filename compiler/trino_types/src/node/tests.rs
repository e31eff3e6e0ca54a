use pretty_assertions::assert_eq;

use super::*;

fn dims(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap_or(NonZeroU32::MIN)
}

#[test]
fn test_array_folds_nested_arrays() {
    let inner = TypeNode::array_of(TypeNode::scalar(ScalarKind::Integer));
    let outer = TypeNode::array_of(inner);

    assert_eq!(
        outer,
        TypeNode::Array {
            element: Box::new(TypeNode::scalar(ScalarKind::Integer)),
            dimensions: dims(2),
        }
    );
    assert_eq!(
        TypeNode::array(outer, 3),
        TypeNode::array(TypeNode::scalar(ScalarKind::Integer), 5)
    );
}

#[test]
fn test_array_zero_dimensions_is_one() {
    let node = TypeNode::array(TypeNode::unknown(""), 0);
    assert!(matches!(node, TypeNode::Array { dimensions, .. } if dimensions.get() == 1));
}

#[test]
fn test_contains_unknown() {
    let clean = TypeNode::map(
        TypeNode::scalar(ScalarKind::Varchar),
        TypeNode::row([("a", TypeNode::scalar(ScalarKind::Integer))]),
    );
    assert!(!clean.contains_unknown());

    let dirty = TypeNode::map(
        TypeNode::scalar(ScalarKind::Varchar),
        TypeNode::row([("a", TypeNode::unknown("foo"))]),
    );
    assert!(dirty.contains_unknown());
    assert!(!dirty.is_unknown());
    assert!(TypeNode::unknown("x").is_unknown());
}

#[test]
fn test_depth() {
    assert_eq!(TypeNode::scalar(ScalarKind::Date).depth(), 1);
    assert_eq!(
        TypeNode::array(TypeNode::scalar(ScalarKind::Date), 4).depth(),
        2
    );
    let nested = TypeNode::map(
        TypeNode::scalar(ScalarKind::Varchar),
        TypeNode::array_of(TypeNode::row([("a", TypeNode::scalar(ScalarKind::Json))])),
    );
    assert_eq!(nested.depth(), 4);
    assert_eq!(TypeNode::row(Vec::<(String, TypeNode)>::new()).depth(), 1);
}

#[test]
fn test_display_canonical() {
    let node = TypeNode::array(
        TypeNode::map(
            TypeNode::scalar(ScalarKind::Varchar),
            TypeNode::row([
                (
                    "min",
                    TypeNode::Scalar(ScalarType::new(ScalarKind::Timestamp).with_timezone(true)),
                ),
                (
                    "cost",
                    TypeNode::Scalar(ScalarType::new(ScalarKind::Decimal).with_args([20, 3])),
                ),
            ]),
        ),
        2,
    );

    assert_eq!(
        node.to_string(),
        "array(array(map(varchar, row(min timestamp with time zone, cost decimal(20,3)))))"
    );
}

#[test]
fn test_display_unknown_is_verbatim() {
    assert_eq!(TypeNode::unknown("interval day to second").to_string(), "interval day to second");
    assert_eq!(
        TypeNode::map(TypeNode::unknown(""), TypeNode::unknown("")).to_string(),
        "map(, )"
    );
}

#[test]
fn test_as_scalar() {
    let node: TypeNode = ScalarKind::Real.into();
    assert_eq!(node.as_scalar().map(|s| s.kind), Some(ScalarKind::Real));
    assert_eq!(TypeNode::unknown("x").as_scalar(), None);
}
