#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use parley::outputs::{CommandSpeech, SpeechSink};

/// Writes an executable shell script into the temp dir and returns its path.
fn fake_tts(body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("parley-tts-{}.sh", uuid::Uuid::new_v4()));
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn argv_of(out: &Path) -> Vec<String> {
    std::fs::read_to_string(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_dash_leading_text_is_not_an_option() {
    let out = std::env::temp_dir().join(format!("parley-argv-{}.txt", uuid::Uuid::new_v4()));
    let script = fake_tts(&format!("printf '%s\\n' \"$@\" > '{}'", out.display()));

    let mut speech = CommandSpeech::new(script.to_string_lossy(), "en_US");
    speech.say("--rate 999", Some("fr_FR")).await.unwrap();
    let argv = argv_of(&out);

    std::fs::remove_file(&script).unwrap();
    std::fs::remove_file(&out).unwrap();

    assert_eq!(argv, vec!["-v", "fr-FR", "--", "--rate 999"]);
}

#[tokio::test]
async fn test_ambient_language_becomes_voice() {
    let out = std::env::temp_dir().join(format!("parley-argv-{}.txt", uuid::Uuid::new_v4()));
    let script = fake_tts(&format!("printf '%s\\n' \"$@\" > '{}'", out.display()));

    let mut speech = CommandSpeech::new(script.to_string_lossy(), "en_US");
    speech.say("-q hello", None).await.unwrap();
    let argv = argv_of(&out);

    std::fs::remove_file(&script).unwrap();
    std::fs::remove_file(&out).unwrap();

    assert_eq!(
        argv,
        vec!["-v", "en-US", "--", "-q hello"],
        "Text must follow the option terminator verbatim"
    );
}

#[tokio::test]
async fn test_non_zero_exit_is_an_error() {
    let script = fake_tts("exit 3");
    let mut speech = CommandSpeech::new(script.to_string_lossy(), "en_US");
    let result = speech.say("hello", None).await;
    std::fs::remove_file(&script).unwrap();

    assert!(result.is_err(), "A failing TTS program must surface as an error");
}
