/*!
 * Tests for the application controller
 */

use std::path::PathBuf;

use phrasesync::app_config::Config;
use phrasesync::app_controller::Controller;

use crate::common;

#[tokio::test]
async fn test_run_withMissingInput_shouldFailWithInputNotFound() {
    let controller = Controller::new_for_test().unwrap();
    let result = controller
        .run(
            PathBuf::from("/nonexistent/take.json"),
            PathBuf::from("/tmp"),
            false,
        )
        .await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Input not found"));
}

#[tokio::test]
async fn test_run_withRecognitionJson_shouldWriteAllThreeOutputs() {
    let dir = common::create_temp_dir().unwrap();
    let dir_path = dir.path().to_path_buf();
    let input = common::create_test_recognition_json(&dir_path, "take.json").unwrap();

    let controller = Controller::new_for_test().unwrap();
    controller
        .run(input, dir_path.clone(), false)
        .await
        .unwrap();

    assert!(dir_path.join("take.ass").exists());
    assert!(dir_path.join("take.srt").exists());
    assert!(dir_path.join("take.transcript.txt").exists());

    let ass = std::fs::read_to_string(dir_path.join("take.ass")).unwrap();
    assert!(ass.contains("[Script Info]"));
    assert_eq!(ass.matches("Dialogue: ").count(), 5); // one event per word

    let srt = std::fs::read_to_string(dir_path.join("take.srt")).unwrap();
    assert!(srt.starts_with("1\n00:00:00,000 --> 00:00:00,400\nHello\n"));
}

#[tokio::test]
async fn test_run_withExistingOutputAndNoForce_shouldSkip() {
    let dir = common::create_temp_dir().unwrap();
    let dir_path = dir.path().to_path_buf();
    let input = common::create_test_recognition_json(&dir_path, "take.json").unwrap();
    common::create_test_file(&dir_path, "take.ass", "stale").unwrap();

    let controller = Controller::new_for_test().unwrap();
    controller
        .run(input.clone(), dir_path.clone(), false)
        .await
        .unwrap();
    assert_eq!(
        std::fs::read_to_string(dir_path.join("take.ass")).unwrap(),
        "stale"
    );

    // With force the stale file is replaced
    controller.run(input, dir_path.clone(), true).await.unwrap();
    assert!(std::fs::read_to_string(dir_path.join("take.ass"))
        .unwrap()
        .contains("[Script Info]"));
}

#[tokio::test]
async fn test_run_withWordlessBatches_shouldWriteNothing() {
    let dir = common::create_temp_dir().unwrap();
    let dir_path = dir.path().to_path_buf();
    let input =
        common::create_test_file(&dir_path, "empty.json", r#"[{"text": "no timing"}]"#).unwrap();

    let controller = Controller::new_for_test().unwrap();
    controller.run(input, dir_path.clone(), false).await.unwrap();

    assert!(!dir_path.join("empty.ass").exists());
    assert!(!dir_path.join("empty.srt").exists());
}

#[tokio::test]
async fn test_runFolder_withMixedFiles_shouldProcessOnlyJson() {
    let dir = common::create_temp_dir().unwrap();
    let dir_path = dir.path().to_path_buf();
    common::create_test_recognition_json(&dir_path, "one.json").unwrap();
    common::create_test_recognition_json(&dir_path, "two.json").unwrap();
    common::create_test_file(&dir_path, "notes.txt", "ignore me").unwrap();

    let controller = Controller::new_for_test().unwrap();
    controller.run_folder(dir_path.clone(), false).await.unwrap();

    assert!(dir_path.join("one.ass").exists());
    assert!(dir_path.join("two.ass").exists());
    assert!(!dir_path.join("notes.ass").exists());
}

#[tokio::test]
async fn test_resync_withMalformedDocument_shouldFailNotWriteEmptyFile() {
    let dir = common::create_temp_dir().unwrap();
    let dir_path = dir.path().to_path_buf();
    let doc = common::create_test_file(&dir_path, "edited.transcript.txt", "no phrases here\n")
        .unwrap();

    let controller = Controller::new_for_test().unwrap();
    let result = controller.resync(doc, dir_path.clone(), false).await;

    assert!(result.is_err());
    assert!(!dir_path.join("edited.transcript.ass").exists());
}

#[tokio::test]
async fn test_resync_withEditedDocument_shouldWriteScript() {
    let dir = common::create_temp_dir().unwrap();
    let dir_path = dir.path().to_path_buf();
    let doc = common::create_test_file(
        &dir_path,
        "edited.transcript.txt",
        "Phrase 1: [00:00 - 00:02]\nText: corrected words here\n",
    )
    .unwrap();

    let controller = Controller::new_for_test().unwrap();
    controller.resync(doc, dir_path.clone(), false).await.unwrap();

    let ass = std::fs::read_to_string(dir_path.join("edited.transcript.ass")).unwrap();
    assert_eq!(ass.matches("Dialogue: ").count(), 3);
    assert!(ass.contains("corrected"));
}

#[tokio::test]
async fn test_convert_withSrtFile_shouldWriteStyledScript() {
    let dir = common::create_temp_dir().unwrap();
    let dir_path = dir.path().to_path_buf();
    let srt = common::create_test_srt(&dir_path, "episode.srt").unwrap();

    let mut config = Config::default();
    config.style = "bold".to_string();
    let controller = Controller::with_config(config).unwrap();
    controller.convert(srt, dir_path.clone(), false).await.unwrap();

    let ass = std::fs::read_to_string(dir_path.join("episode.ass")).unwrap();
    assert!(ass.contains("Style: bold,"));
    assert_eq!(ass.matches("Dialogue: ").count(), 3);
    assert!(ass.contains("0:00:01.00,0:00:04.00,bold"));
}

#[tokio::test]
async fn test_convert_withAllBlocksMalformed_shouldFail() {
    let dir = common::create_temp_dir().unwrap();
    let dir_path = dir.path().to_path_buf();
    let srt = common::create_test_file(&dir_path, "broken.srt", "1\nnot a time\nText\n").unwrap();

    let controller = Controller::new_for_test().unwrap();
    let result = controller.convert(srt, dir_path.clone(), false).await;

    assert!(result.is_err());
    assert!(!dir_path.join("broken.ass").exists());
}
