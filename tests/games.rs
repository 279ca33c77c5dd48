use jatim_detective::console::ScriptedConsole;
use jatim_detective::games::hangman::{Hangman, HangmanState};
use jatim_detective::games::{self, Session, hangman, one_word, quiz, wordle};
use jatim_detective::{GameConfig, GameError, KeywordTable, Leaderboard};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> GameConfig
{
    GameConfig::default().with_data_dir(dir.path())
}

fn single_word_config(dir: &TempDir, label: &'static str, word: &'static str) -> GameConfig
{
    let table = KeywordTable::new(
        vec![(label.to_string(), vec![word.to_string()])],
        "lainnya",
    )
    .unwrap();
    config_in(dir).with_table(table)
}

#[test]
fn hangman_guessing_every_letter_wins_without_errors()
{
    for word in ["jancok", "mangan", "panjenengan"] {
        let mut game = Hangman::new(word);
        for letter in word.chars() {
            game.guess(&letter.to_string());
        }
        assert_eq!(game.state(), HangmanState::Won, "word {word}");
        assert_eq!(game.errors(), 0, "word {word}");
    }
}

#[test]
fn menu_rejects_unknown_choice_and_exits()
{
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    let mut console = ScriptedConsole::new(["9", "", "  EXIT "]);
    let mut session = Session::new(&config, &mut console, StdRng::seed_from_u64(7));
    games::run_menu(&mut session).unwrap();

    assert_eq!(
        console
            .lines()
            .iter()
            .filter(|line| line.as_str() == "Invalid choice.")
            .count(),
        2
    );
    assert!(console.contains("See you!"));
    assert_eq!(console.remaining_answers(), 0);
}

#[test]
fn menu_dispatches_to_keywords_and_leaderboard()
{
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    let mut console = ScriptedConsole::new(["2", "3", "7"]);
    let mut session = Session::new(&config, &mut console, StdRng::seed_from_u64(7));
    games::run_menu(&mut session).unwrap();

    assert!(console.contains("=== KEYWORDS PER DIALECT (sample) ==="));
    assert!(console.contains("No scores yet."));
}

#[test]
fn menu_leaderboard_survives_a_corrupt_line()
{
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    fs::write(&config.leaderboard_path, b"t1,ana,3,5\nt2,b\xffdi,7,5\n").unwrap();
    let mut console = ScriptedConsole::new(["3", "7"]);
    let mut session = Session::new(&config, &mut console, StdRng::seed_from_u64(7));
    games::run_menu(&mut session).unwrap();

    assert!(console.contains("1. ana - 3/5  (t1)"));
    assert!(console.contains("See you!"));
}

#[test]
fn running_out_of_input_interrupts_the_menu()
{
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    let mut console = ScriptedConsole::new(["1"]);
    let mut session = Session::new(&config, &mut console, StdRng::seed_from_u64(7));
    assert!(matches!(
        games::run_menu(&mut session),
        Err(GameError::Interrupted)
    ));
}

#[test]
fn quiz_scores_and_records_the_player()
{
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir).with_samples(&[("Sapa ka' nyare?", "madura")]);
    let mut console = ScriptedConsole::new(["abc", "", "Madura", "Ana", "y", "Sapa ka' nyare?", "madura"]);
    let mut session = Session::new(&config, &mut console, StdRng::seed_from_u64(3));
    quiz::run(&mut session).unwrap();

    assert!(console.contains("Please enter a positive number."));
    assert!(console.contains("Round 1/1"));
    assert!(console.contains("Model answer: madura"));
    assert!(console.contains("  - madura: [ka', nyare, sapa]"));
    assert!(console.contains("Final score: 1/1"));
    assert!(console.contains("Thanks, feedback saved."));

    let top = Leaderboard::new(&config.leaderboard_path).top(10).unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!((top[0].name.as_str(), top[0].score, top[0].rounds), ("Ana", 1, 1));

    let feedback = fs::read_to_string(&config.feedback_path).unwrap();
    assert!(feedback.trim_end().ends_with("\tmadura\tSapa ka' nyare?"));
}

#[test]
fn quiz_without_name_leaves_leaderboard_untouched()
{
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir).with_samples(&[("Saya mau pergi ke pasar", "lainnya")]);
    let mut console = ScriptedConsole::new(["2", "madura", "", "n"]);
    let mut session = Session::new(&config, &mut console, StdRng::seed_from_u64(3));
    quiz::run(&mut session).unwrap();

    assert!(console.contains("✘ Wrong guess. The right answer: lainnya"));
    assert!(console.contains("Model: the prediction for this sentence is right."));
    assert!(console.contains("Final score: 0/1"));
    assert!(!config.leaderboard_path.exists());
    assert!(!config.feedback_path.exists());
}

#[test]
fn hangman_round_with_a_single_word()
{
    let dir = tempfile::tempdir().unwrap();
    let config = single_word_config(&dir, "madura", "ka'ula");
    let mut console = ScriptedConsole::new(["", "k", "k", "z", "a", "u", "l"]);
    let mut session = Session::new(&config, &mut console, StdRng::seed_from_u64(11));
    hangman::run(&mut session).unwrap();

    assert!(console.contains("Please type something."));
    assert!(console.contains("You already tried that letter."));
    assert!(console.contains("No letter 'z'."));
    assert!(console.contains("CONGRATS - YOU WIN!"));
    assert!(console.contains("Word: kaula  (dialect: madura)"));
}

#[test]
fn hangman_round_lost_after_six_mistakes()
{
    let dir = tempfile::tempdir().unwrap();
    let config = single_word_config(&dir, "suroboyoan", "rek");
    let mut console = ScriptedConsole::new(["cak", "cok", "a", "b", "c", "d"]);
    let mut session = Session::new(&config, &mut console, StdRng::seed_from_u64(11));
    hangman::run(&mut session).unwrap();

    assert!(console.contains("Wrong word guess."));
    assert!(console.contains("GAME OVER - you ran out of lives."));
    assert!(console.contains("The word was: rek  (dialect: suroboyoan)"));
}

#[test]
fn wordle_with_player_chosen_target()
{
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    let mut console = ScriptedConsole::new(["x", "9", "4", "Rawon", "rek", "rowan", "rawon", "Budi"]);
    let mut session = Session::new(&config, &mut console, StdRng::seed_from_u64(5));
    wordle::run(&mut session).unwrap();

    assert!(console.contains("Enter a number."));
    assert!(console.contains("Invalid choice."));
    assert!(console.contains("The word must have 5 letters."));
    assert!(console.contains("r o w a n    🟩🟨🟩🟨🟩"));
    assert!(console.contains("🎉 Correct! You guessed it."));

    let top = Leaderboard::new(&config.leaderboard_path).top(1).unwrap();
    assert_eq!((top[0].name.as_str(), top[0].score, top[0].rounds), ("Budi", 1, 1));
}

#[test]
fn wordle_rejects_short_player_target()
{
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    let mut console = ScriptedConsole::new(["4", "le"]);
    let mut session = Session::new(&config, &mut console, StdRng::seed_from_u64(5));
    wordle::run(&mut session).unwrap();
    assert!(console.contains("Invalid word length."));
}

#[test]
fn wordle_loss_reveals_the_dialect_word()
{
    let dir = tempfile::tempdir().unwrap();
    let config = single_word_config(&dir, "madura", "beddhi");
    let mut console = ScriptedConsole::new(["1", "aaaaaa", "aaaaaa", "aaaaaa", "aaaaaa", "aaaaaa", "aaaaaa"]);
    let mut session = Session::new(&config, &mut console, StdRng::seed_from_u64(5));
    wordle::run(&mut session).unwrap();
    assert!(console.contains("Out of attempts! The word was: beddhi"));
    assert!(!config.leaderboard_path.exists());
}

#[test]
fn one_word_correct_guess_is_recorded()
{
    let dir = tempfile::tempdir().unwrap();
    let config = single_word_config(&dir, "madura", "dhika");
    let mut console = ScriptedConsole::new(["y", "madura", "Sari"]);
    let mut session = Session::new(&config, &mut console, StdRng::seed_from_u64(9));
    one_word::run(&mut session).unwrap();

    assert!(console.contains("  \"dhika\""));
    assert!(console.contains("Hint: length (without apostrophes) = 5"));
    assert!(console.contains("Model prediction (word only): madura"));
    assert!(console.contains("1. Sari - 1/1"));
}
