use crate::config::{SplashTiming, Tint};
use crate::console::{Console, Token};
use crate::error::Result;

const LOGO: &str = r#"
 ________    _______  ___________  _______  __   ___  ___________  __     _______
|"      "\  /"     "|("     _   ")/"     "||/"| /  ")("     _   ")|" \   /"     "|
(.  ___  :)(: ______) )__/  \\__/(: ______)(: |/   /  )__/  \\__/ ||  | (: ______)
|: \   ) || \/    |      \\_ /    \/    |  |    __/      \\_ /    |:  |  \/    |
(| (___\ || // ___)_     |.  |    // ___)_ (// _  \      |.  |    |.  |  // ___)
|:       :)(:      "|    \:  |   (:      "||: | \  \     \:  |    /\  |\(:  (
(________/  \_______)     \__|    \_______)(__|  \__)     \__|   (__\_|_)\__/

      ___      __  ___________  __     ___      ___
     |"  |    /""\("     _   ")|" \   |"  \    /"  |
     ||  |   /    \)__/  \\__/ ||  |   \   \  //   |
     |:  |  /' /\  \  \\_ /    |:  |   /\\  \/.    |
  ___|  /  //  __'  \ |.  |    |.  |  |: \.        |
 /  :|_/ )/   /  \\  \\:  |    /\  |\ |.  \    /:  |
(_______/(___/    \___)\__|   (__\_|_)|___|\__/|___|
"#;

/// Logo rows, row `i` tinted with rainbow color `i + shift`.
pub fn frame(shift: usize) -> Vec<Vec<Token>>
{
    LOGO.split('\n')
        .enumerate()
        .map(|(idx, line)| vec![Token::tinted(line, Tint::Rainbow(idx + shift))])
        .collect()
}

pub fn play(console: &mut dyn Console, timing: &SplashTiming) -> Result<()>
{
    for shift in 0..timing.cycles {
        console.render_frame(&frame(shift))?;
        console.pause(timing.frame)?;
    }
    console.render_frame(&frame(0))?;
    console.pause(timing.hold)?;
    console.clear()
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::console::ScriptedConsole;
    use std::time::Duration;

    #[test]
    fn rows_shift_one_color_per_frame()
    {
        let first = frame(0);
        let second = frame(1);
        assert_eq!(first.len(), second.len());
        assert_eq!(first[0][0].tint, Some(Tint::Rainbow(0)));
        assert_eq!(second[0][0].tint, Some(Tint::Rainbow(1)));
        assert_eq!(first[3][0].text, second[3][0].text);
    }

    #[test]
    fn play_clears_once_per_frame_plus_final()
    {
        let mut console = ScriptedConsole::default();
        let timing = SplashTiming {
            cycles: 3,
            frame: Duration::ZERO,
            hold: Duration::ZERO,
        };
        play(&mut console, &timing).unwrap();
        assert_eq!(console.frames_cleared(), 5);
    }
}
