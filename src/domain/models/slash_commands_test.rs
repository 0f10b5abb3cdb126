use super::SlashCommand;

#[test]
fn it_parse_empty_string() {
    let text = "";
    assert!(SlashCommand::parse(text).is_none());
}

#[test]
fn it_parse_space_only() {
    let text = " ";
    assert!(SlashCommand::parse(text).is_none());
}

#[test]
fn it_parse_single_slash() {
    let text = "/";
    assert!(SlashCommand::parse(text).is_none());
}

#[test]
fn it_parse_invalid_prefix() {
    let text = "!q";
    assert!(SlashCommand::parse(text).is_none());
}

#[test]
fn it_parse_plain_text() {
    let text = "Eco-friendly fitness app for women";
    assert!(SlashCommand::parse(text).is_none());
}

#[test]
fn it_parse_valid_prefix() {
    let text = "/q";
    let cmd = SlashCommand::parse(text);
    assert!(cmd.is_some());
    assert_eq!(cmd.unwrap().command, "/q");
}

#[test]
fn it_is_quit() {
    assert!(SlashCommand::parse("/q").unwrap().is_quit());
    assert!(SlashCommand::parse("/quit").unwrap().is_quit());
    assert!(SlashCommand::parse("/exit").unwrap().is_quit());
    assert!(!SlashCommand::parse("/new").unwrap().is_quit());
}

#[test]
fn it_is_feature_with_args() {
    let cmd = SlashCommand::parse("/feature  logo ").unwrap();
    assert!(cmd.is_feature());
    assert_eq!(cmd.args, vec!["logo".to_string()]);

    let cmd = SlashCommand::parse("/f tagline").unwrap();
    assert!(cmd.is_feature());
    assert_eq!(cmd.args, vec!["tagline".to_string()]);
}

#[test]
fn it_is_feature_list() {
    assert!(SlashCommand::parse("/features").unwrap().is_feature_list());
    assert!(SlashCommand::parse("/fl").unwrap().is_feature_list());
    assert!(!SlashCommand::parse("/features").unwrap().is_feature());
}

#[test]
fn it_is_new_chat() {
    assert!(SlashCommand::parse("/new").unwrap().is_new_chat());
    assert!(SlashCommand::parse("/n").unwrap().is_new_chat());
}

#[test]
fn it_is_retry() {
    assert!(SlashCommand::parse("/retry").unwrap().is_retry());
    assert!(SlashCommand::parse("/r").unwrap().is_retry());
}

#[test]
fn it_is_help() {
    assert!(SlashCommand::parse("/help").unwrap().is_help());
    assert!(SlashCommand::parse("/h").unwrap().is_help());
}
