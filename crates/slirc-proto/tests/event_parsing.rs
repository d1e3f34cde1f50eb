//! Parser behaviour across every recognised command kind.

use slirc_proto::{parse, CommandKind, ParseFailure};

struct Case {
    line: &'static str,
    kind: CommandKind,
    source: &'static str,
    channel: Option<&'static str>,
    text: Option<&'static str>,
}

const CASES: &[Case] = &[
    Case {
        line: ":server NOTICE AUTH",
        kind: CommandKind::Notice,
        source: "server",
        channel: Some("AUTH"),
        text: Some(""),
    },
    Case {
        line: ":nick!~username@host PRIVMSG #channel :chat chat chat",
        kind: CommandKind::PrivateMessage,
        source: "nick",
        channel: Some("#channel"),
        text: Some("chat chat chat"),
    },
    Case {
        line: ":nick!~username@host PRIVMSG #channel :\x01ACTION emote\x01",
        kind: CommandKind::PrivateMessage,
        source: "nick",
        channel: Some("#channel"),
        text: Some("\x01ACTION emote"),
    },
    Case {
        line: ":trapro!~trahari@75-145-17-54-Washington.hfc.comcastbusiness.net PRIVMSG gobot :HELLO",
        kind: CommandKind::PrivateMessage,
        source: "trapro",
        channel: Some("gobot"),
        text: Some("HELLO"),
    },
    Case {
        line: ":gobot MODE gobot :+i",
        kind: CommandKind::Mode,
        source: "gobot",
        channel: Some("gobot"),
        text: Some("+i"),
    },
    Case {
        line: ":alice!~a@example.org JOIN :#rust",
        kind: CommandKind::Join,
        source: "alice",
        channel: Some("#rust"),
        text: None,
    },
    Case {
        line: ":alice!~a@example.org PART #rust :later",
        kind: CommandKind::Part,
        source: "alice",
        channel: Some("#rust"),
        text: None,
    },
    Case {
        line: ":alice!~a@example.org QUIT :Quit: leaving",
        kind: CommandKind::Quit,
        source: "alice",
        channel: None,
        text: Some("Quit: leaving"),
    },
    Case {
        line: "PING :irc.example.net",
        kind: CommandKind::Ping,
        source: "irc.example.net",
        channel: None,
        text: None,
    },
    Case {
        line: ":irc.example.net 001 gobot :Welcome to the network",
        kind: CommandKind::Numeric,
        source: "irc.example.net",
        channel: None,
        text: Some("Welcome to the network"),
    },
];

#[test]
fn test_basic_message_parsing() {
    for case in CASES {
        let event = parse(case.line).unwrap_or_else(|e| panic!("{:?} failed: {e}", case.line));
        assert_eq!(event.kind, case.kind, "kind for {:?}", case.line);
        assert_eq!(event.source, case.source, "source for {:?}", case.line);
        assert_eq!(event.channel.as_deref(), case.channel, "channel for {:?}", case.line);
        assert_eq!(event.text.as_deref(), case.text, "text for {:?}", case.line);
    }
}

#[test]
fn test_server_lines_have_no_user() {
    let event = parse(":irc.example.net 376 gobot :End of /MOTD command.").unwrap();
    assert!(event.nick.is_empty());
    assert!(event.user.is_empty());
    assert_eq!(event.code.as_deref(), Some("376"));
    assert_eq!(event.args, vec!["gobot"]);
}

#[test]
fn test_failures_keep_raw_text() {
    let cases = [
        ("", ParseFailure::Empty),
        ("   \r\n", ParseFailure::Empty),
        (":server", ParseFailure::TooFewTokens),
        ("PING", ParseFailure::MissingPingDaemon),
        (":server PING", ParseFailure::MissingPingDaemon),
        (":nick!u@h PART", ParseFailure::MissingChannel),
        (":nick!u@h NOTICE", ParseFailure::MissingChannel),
    ];

    for (line, reason) in cases {
        let err = parse(line).unwrap_err();
        assert_eq!(err.reason, reason, "reason for {line:?}");
        assert_eq!(err.raw, line);
        assert!(!err.to_string().is_empty());
    }
}

#[test]
fn test_name_list_strips_markers() {
    let event = parse(":irc.example.net 353 gobot = #rust :gobot @alice +bob ++carol").unwrap();
    let names: Vec<_> = event.names().collect();
    assert_eq!(names, vec!["gobot", "alice", "bob", "carol"]);

    let other = parse(":irc.example.net 366 gobot #rust :End of /NAMES list.").unwrap();
    assert_eq!(other.names().count(), 0);
}

mod properties {
    use proptest::prelude::*;
    use slirc_proto::{parse, CommandKind};

    fn nickname_strategy() -> impl Strategy<Value = String> {
        prop::string::string_regex("[a-zA-Z\\[\\]^_`{|}][a-zA-Z0-9\\-\\[\\]^_`{|}]{0,8}")
            .expect("valid regex")
    }

    fn channel_strategy() -> impl Strategy<Value = String> {
        prop::string::string_regex("#[a-zA-Z0-9_\\-]{1,20}").expect("valid regex")
    }

    fn text_strategy() -> impl Strategy<Value = String> {
        prop::string::string_regex("[^\r\n\0\x01]{0,200}").expect("valid regex")
    }

    proptest! {
        #[test]
        fn parse_never_panics(line in "\\PC{0,300}") {
            let _ = parse(&line);
        }

        #[test]
        fn join_never_carries_text(nick in nickname_strategy(), channel in channel_strategy()) {
            let event = parse(&format!(":{nick}!~u@host JOIN :{channel}")).unwrap();
            prop_assert_eq!(event.kind, CommandKind::Join);
            prop_assert_eq!(event.text, None);
            prop_assert_eq!(event.channel.as_deref(), Some(channel.as_str()));
        }

        #[test]
        fn privmsg_round_trips_fields(
            nick in nickname_strategy(),
            channel in channel_strategy(),
            text in text_strategy(),
        ) {
            let event = parse(&format!(":{nick}!~u@host PRIVMSG {channel} :{text}")).unwrap();
            prop_assert_eq!(event.kind, CommandKind::PrivateMessage);
            prop_assert_eq!(&event.nick, &nick);
            prop_assert_eq!(event.channel.as_deref(), Some(channel.as_str()));
            prop_assert_eq!(event.text(), text.trim_end());
            prop_assert_eq!(event.code, None);
        }

        #[test]
        fn part_never_carries_text(
            nick in nickname_strategy(),
            channel in channel_strategy(),
            reason in text_strategy(),
        ) {
            let event = parse(&format!(":{nick}!~u@host PART {channel} :{reason}")).unwrap();
            prop_assert_eq!(event.kind, CommandKind::Part);
            prop_assert_eq!(event.text, None);
        }
    }
}
