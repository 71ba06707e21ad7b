use super::*;

#[test]
fn control_flow_keywords() {
    let keywords = Keywords::new();
    assert_eq!(keywords.lookup("loop"), Some(Kind::Loop));
    assert_eq!(keywords.lookup("condition"), Some(Kind::Condition));
    assert_eq!(keywords.lookup("else"), Some(Kind::Else));
    assert_eq!(keywords.lookup("break"), Some(Kind::Break));
    assert_eq!(keywords.lookup("continue"), Some(Kind::Continue));
    assert_eq!(keywords.lookup("return"), Some(Kind::Return));
}

#[test]
fn program_structure_keywords() {
    let keywords = Keywords::new();
    assert_eq!(keywords.lookup("start"), Some(Kind::Start));
    assert_eq!(keywords.lookup("finish"), Some(Kind::Finish));
    assert_eq!(keywords.lookup("declare"), Some(Kind::Declare));
    assert_eq!(keywords.lookup("function"), Some(Kind::Function));
    assert_eq!(keywords.lookup("input"), Some(Kind::Input));
    assert_eq!(keywords.lookup("output"), Some(Kind::Output));
}

#[test]
fn boolean_literals_share_a_kind() {
    let keywords = Keywords::new();
    assert_eq!(keywords.lookup("true"), Some(Kind::Boolean));
    assert_eq!(keywords.lookup("false"), Some(Kind::Boolean));
}

#[test]
fn lookup_is_case_sensitive() {
    let keywords = Keywords::new();
    assert_eq!(keywords.lookup("Start"), None);
    assert_eq!(keywords.lookup("TRUE"), None);
    assert_eq!(keywords.lookup("Loop"), None);
}

#[test]
fn non_keywords() {
    let keywords = Keywords::new();
    assert_eq!(keywords.lookup(""), None);
    assert_eq!(keywords.lookup("while"), None);
    assert_eq!(keywords.lookup("starts"), None);
    assert_eq!(keywords.len(), 14);
}
