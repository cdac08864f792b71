use crate::{
    error::Result,
    format::{self, FormatRecord},
    prompt::Prompter,
};
use log::debug;

/// Distinct values of `column`, in the order they are first seen.
pub fn distinct_values(formats: &[FormatRecord], column: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();

    for value in formats.iter().map(|x| x.get(column)) {
        if !values.iter().any(|x| x == value) {
            values.push(value.to_owned());
        }
    }

    values
}

/// Removes formats which carry no audio track.
pub fn without_video_only(formats: Vec<FormatRecord>) -> Vec<FormatRecord> {
    formats.into_iter().filter(|x| !x.is_video_only()).collect()
}

/// One narrowing step over a single column.
#[derive(Debug, PartialEq)]
pub enum Narrowing {
    /// Zero or one distinct value, nothing to ask.
    Uniform(Vec<FormatRecord>),
    /// Several distinct values, the user has to pick one of `choices`.
    Choice {
        column: String,
        choices: Vec<String>,
        formats: Vec<FormatRecord>,
    },
}

impl Narrowing {
    pub fn new(formats: Vec<FormatRecord>, column: &str) -> Self {
        let choices = distinct_values(&formats, column);

        if choices.len() <= 1 {
            Self::Uniform(formats)
        } else {
            Self::Choice {
                column: column.to_owned(),
                choices,
                formats,
            }
        }
    }

    /// Keeps the formats matching the `index`th choice. A uniform step passes
    /// its formats through untouched.
    pub fn pick(self, index: usize) -> Vec<FormatRecord> {
        match self {
            Self::Uniform(formats) => formats,
            Self::Choice {
                column,
                choices,
                formats,
            } => match choices.get(index) {
                Some(value) => formats
                    .into_iter()
                    .filter(|x| x.get(&column) == value)
                    .collect(),
                None => Vec::new(),
            },
        }
    }
}

/// Walks the user from the full format table down to a single format.
pub struct FormatSelector<'a, P: ?Sized> {
    prompter: &'a mut P,
}

impl<'a, P: Prompter + ?Sized> FormatSelector<'a, P> {
    pub fn new(prompter: &'a mut P) -> Self {
        Self { prompter }
    }

    /// Returns `None` when no format survives the filters.
    pub fn select(mut self, formats: Vec<FormatRecord>) -> Result<Option<FormatRecord>> {
        let total = formats.len();
        let formats = without_video_only(formats);
        debug!("{} of {} formats left after dropping video only", formats.len(), total);

        let formats = self.narrow(formats, format::RESOLUTION, "Select resolution:")?;
        let mut formats = self.narrow(formats, format::EXTENSION, "Select extension:")?;

        if formats.len() > 1 {
            let choices = formats.iter().map(|x| x.to_string()).collect::<Vec<_>>();
            let index = self.prompter.select("Select format:", &choices)?;
            return Ok((index < formats.len()).then(|| formats.swap_remove(index)));
        }

        Ok(formats.pop())
    }

    fn narrow(
        &mut self,
        formats: Vec<FormatRecord>,
        column: &str,
        message: &str,
    ) -> Result<Vec<FormatRecord>> {
        let narrowing = Narrowing::new(formats, column);

        let index = match &narrowing {
            Narrowing::Uniform(_) => {
                debug!("Skipping {column} prompt, nothing to choose from");
                0
            }
            Narrowing::Choice { choices, .. } => self.prompter.select(message, choices)?,
        };

        Ok(narrowing.pick(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table;

    const TABLE: &str = "\
format  extension  resolution  note
140     m4a        audio only  DASH audio
160     mp4        256x144     DASH video, video only
17      3gp        176x144     small
36      3gp        320x240     small
18      mp4        640x360     medium
43      webm       640x360     medium
22      mp4        1280x720    hd720
";

    /// Answers with fixed indices and records every question.
    struct Scripted {
        answers: Vec<usize>,
        asked: Vec<(String, Vec<String>)>,
    }

    impl Scripted {
        fn new(answers: &[usize]) -> Self {
            Self {
                answers: answers.iter().rev().copied().collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompter for Scripted {
        fn select(&mut self, message: &str, choices: &[String]) -> Result<usize> {
            self.asked.push((message.to_owned(), choices.to_vec()));
            Ok(self.answers.pop().unwrap())
        }

        fn confirm(&mut self, _: &str, default: bool) -> Result<bool> {
            Ok(default)
        }
    }

    fn formats() -> Vec<FormatRecord> {
        table::parse_columns(TABLE)
    }

    #[test]
    fn distinct_values_keep_first_seen_order() {
        assert_eq!(
            distinct_values(&formats(), "extension"),
            ["m4a", "mp4", "3gp", "webm"]
        );
        assert!(distinct_values(&[], "extension").is_empty());
    }

    #[test]
    fn video_only_formats_are_dropped() {
        let formats = without_video_only(formats());
        assert_eq!(formats.len(), 6);
        assert!(formats.iter().all(|x| !x.note().contains("video only")));
    }

    #[test]
    fn uniform_column_passes_through() {
        let formats = table::parse_columns("format  extension\n1       mp4\n2       mp4\n");
        let narrowing = Narrowing::new(formats.clone(), "extension");
        assert_eq!(narrowing, Narrowing::Uniform(formats.clone()));
        assert_eq!(narrowing.pick(5), formats);
    }

    #[test]
    fn empty_set_is_uniform() {
        assert_eq!(Narrowing::new(Vec::new(), "resolution"), Narrowing::Uniform(Vec::new()));
    }

    #[test]
    fn narrowing_keeps_matching_formats_only() {
        let input = formats();
        let narrowing = Narrowing::new(input.clone(), "resolution");

        match &narrowing {
            Narrowing::Choice { choices, .. } => assert_eq!(
                choices,
                &["audio only", "256x144", "176x144", "320x240", "640x360", "1280x720"]
            ),
            Narrowing::Uniform(_) => panic!("resolution varies"),
        }

        let output = narrowing.pick(4);
        assert!(output.len() <= input.len());
        assert!(output.iter().all(|x| input.contains(x)));
        assert_eq!(
            output.iter().map(|x| x.format()).collect::<Vec<_>>(),
            ["18", "43"]
        );
    }

    #[test]
    fn out_of_range_pick_is_empty() {
        assert!(Narrowing::new(formats(), "resolution").pick(99).is_empty());
    }

    #[test]
    fn single_survivor_needs_no_disambiguation() {
        let mut prompter = Scripted::new(&[4]);
        let chosen = FormatSelector::new(&mut prompter).select(formats()).unwrap();

        assert_eq!(chosen.unwrap().format(), "22");
        assert_eq!(prompter.asked.len(), 1);
        assert_eq!(prompter.asked[0].0, "Select resolution:");
        assert_eq!(
            prompter.asked[0].1,
            ["audio only", "176x144", "320x240", "640x360", "1280x720"]
        );
    }

    #[test]
    fn extension_prompt_follows_resolution() {
        let mut prompter = Scripted::new(&[3, 1]);
        let chosen = FormatSelector::new(&mut prompter).select(formats()).unwrap();

        assert_eq!(chosen.unwrap().format(), "43");
        assert_eq!(prompter.asked[1].0, "Select extension:");
        assert_eq!(prompter.asked[1].1, ["mp4", "webm"]);
    }

    #[test]
    fn remaining_ties_are_disambiguated() {
        let mut prompter = Scripted::new(&[1]);
        let chosen = FormatSelector::new(&mut prompter)
            .select(table::parse_columns(
                "format  extension  resolution  note\n18      mp4        640x360     a\n134     mp4        640x360     b\n",
            ))
            .unwrap();

        assert_eq!(chosen.unwrap().format(), "134");
        assert_eq!(prompter.asked.len(), 1);
        assert_eq!(prompter.asked[0].0, "Select format:");
        assert_eq!(prompter.asked[0].1.len(), 2);
    }

    #[test]
    fn nothing_left_after_prefilter() {
        let mut prompter = Scripted::new(&[]);
        let chosen = FormatSelector::new(&mut prompter)
            .select(table::parse_columns(
                "format  note\n137     video only\n248     video only\n",
            ))
            .unwrap();

        assert!(chosen.is_none());
        assert!(prompter.asked.is_empty());
    }
}
