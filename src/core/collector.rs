use crate::domain::model::{FormControl, FormData};

/// Reads the named controls of a form into a [`FormData`] map. Controls
/// without a name are skipped; for repeated names the last one wins.
pub fn collect_form_data<I>(controls: I) -> FormData
where
    I: IntoIterator<Item = FormControl>,
{
    let mut data = FormData::new();
    for control in controls {
        match control.name {
            Some(name) if !name.is_empty() => {
                data.insert(name, control.value);
            }
            _ => {}
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_skips_unnamed_controls() {
        let data = collect_form_data(vec![
            FormControl::named("username", "912345678"),
            FormControl::unnamed("ignored"),
            FormControl::named("", "also ignored"),
        ]);

        assert_eq!(data.len(), 1);
        assert_eq!(data.get("username").map(String::as_str), Some("912345678"));
    }

    #[test]
    fn test_collect_last_write_wins() {
        let data = collect_form_data(vec![
            FormControl::named("msg", "first"),
            FormControl::named("msg", "second"),
        ]);

        assert_eq!(data.get("msg").map(String::as_str), Some("second"));
    }

    #[test]
    fn test_collect_keeps_empty_values() {
        let data = collect_form_data(vec![FormControl::named("msg", "")]);
        assert_eq!(data.get("msg").map(String::as_str), Some(""));
    }
}
