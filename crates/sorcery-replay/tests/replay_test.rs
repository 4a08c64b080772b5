//! Integration tests for replaying recorded command sessions.

mod common;

use sorcery_core::host::Notice;
use sorcery_core::player::PlayerId;
use sorcery_replay::error::AppError;
use sorcery_replay::replay;
use sorcery_rewards::config::RewardConfig;
use uuid::Uuid;

#[test]
fn test_replay_scores_a_session() {
    let harness = common::harness();
    let player = Uuid::new_v4();
    let input = [
        common::command_line(Some(player), "say hi"),
        common::command_line(Some(player), "say hi"),
        common::command_line(Some(player), "say ho"),
        common::command_line(Some(player), "execute as @a at @s run say hello"),
        common::command_line(Some(player), r#"summon zombie ~ ~ ~ {Tags:["boss"]}"#),
    ]
    .join("\n");

    let (summary, lines) = common::run_replay(&harness, &input);

    assert_eq!(summary.commands, 5);
    assert_eq!(summary.rewarded, 3);
    assert_eq!(summary.rejected, 2);
    assert_eq!(summary.total_xp, 9 + 24 + 66);

    assert_eq!(lines[0]["outcome"], "rewarded");
    assert_eq!(lines[0]["amount"], 9);
    assert_eq!(lines[0]["player_id"], player.to_string());
    assert_eq!(lines[1]["reason"], "exact_repeat");
    assert_eq!(lines[2]["reason"], "stale_syntax");
    assert_eq!(lines[3]["amount"], 24);
    assert_eq!(lines[4]["amount"], 66);
    assert_eq!(lines[4]["line"], 5);

    assert_eq!(harness.grantor.total_for(PlayerId(player)), 99);
}

#[test]
fn test_replay_only_notifies_on_reward_and_stale_syntax() {
    let harness = common::harness();
    let player = Uuid::new_v4();
    let input = [
        common::command_line(Some(player), "tp"),
        common::command_line(Some(player), "say hi"),
        common::command_line(Some(player), "say hi"),
        common::command_line(Some(player), "say ho"),
    ]
    .join("\n");

    common::run_replay(&harness, &input);

    let notices: Vec<Notice> = harness
        .notifier
        .sent()
        .into_iter()
        .map(|(_, notice)| notice)
        .collect();
    assert_eq!(
        notices,
        vec![Notice::SyntaxPower { amount: 9 }, Notice::StaleSyntax]
    );
}

#[test]
fn test_replay_ignores_non_player_commands() {
    let harness = common::harness();
    let input = common::command_line(None, "execute as @a run say hello");

    let (summary, lines) = common::run_replay(&harness, &input);

    assert_eq!(summary.ignored, 1);
    assert_eq!(lines[0]["outcome"], "ignored");
    assert!(lines[0]["player_id"].is_null());
    assert!(harness.grantor.grants().is_empty());
}

#[test]
fn test_replay_disconnect_resets_player() {
    let harness = common::harness();
    let player = Uuid::new_v4();
    let input = [
        common::command_line(Some(player), "say hi"),
        common::disconnect_line(player),
        String::new(),
        common::command_line(Some(player), "say hi"),
    ]
    .join("\n");

    let (summary, lines) = common::run_replay(&harness, &input);

    assert_eq!(summary.disconnects, 1);
    assert_eq!(summary.rewarded, 2);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["line"], 4);
}

#[test]
fn test_replay_respects_custom_thresholds() {
    let harness = common::harness_with(&RewardConfig {
        min_edit_distance: 1,
        ..RewardConfig::default()
    });
    let player = Uuid::new_v4();
    let input = [
        common::command_line(Some(player), "say hi"),
        common::command_line(Some(player), "say ho"),
    ]
    .join("\n");

    let (summary, _) = common::run_replay(&harness, &input);

    assert_eq!(summary.rewarded, 2);
}

#[test]
fn test_replay_reports_malformed_line() {
    let harness = common::harness();
    let input = format!(
        "{}\nnot json\n",
        common::command_line(Some(Uuid::new_v4()), "say hi")
    );
    let mut output = Vec::new();

    let err = replay::run(&harness.handler, input.as_bytes(), &mut output).unwrap_err();

    match err {
        AppError::Input { line, .. } => assert_eq!(line, 2),
        other => panic!("expected Input, got {other:?}"),
    }
    // The first line was still processed.
    assert_eq!(harness.grantor.grants().len(), 1);
}
