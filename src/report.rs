//! Builds, writes and parses property reports: the properties sharing a name prefix, sorted by
//! name, one `name=value` line each.

use crate::properties::{PropertyMap, PropertyTable};
use log::*;
use std::{
    fmt,
    io::{self, Write},
};

/// A single line of a property report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLine<'a> {
    /// The property name.
    pub name: &'a str,
    /// The property value.
    pub value: &'a str,
}

impl fmt::Display for ReportLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Returns the report lines for every property in a given table whose name starts with a given
/// prefix, sorted by name in code point order.
///
/// A name the table lists but then can't return a value for is skipped.
pub fn lines<'a, T>(prefix: &str, table: &'a T) -> Vec<ReportLine<'a>>
where
    T: PropertyTable + ?Sized,
{
    let mut names = table
        .keys()
        .into_iter()
        .filter(|name| name.starts_with(prefix))
        .collect::<Vec<&str>>();
    names.sort_unstable();

    names
        .into_iter()
        .filter_map(|name| match table.get(name) {
            Some(value) => Some(ReportLine { name, value }),
            None => {
                warn!("Property {} disappeared from the table, skipping it", name);
                None
            }
        })
        .collect()
}

/// Writes the report for a given prefix and table into a given writer. Returns an error only if
/// writing fails.
pub fn run<T, W>(prefix: &str, table: &T, out: &mut W) -> io::Result<()>
where
    T: PropertyTable + ?Sized,
    W: Write,
{
    let lines = lines(prefix, table);
    debug!("Reporting {} properties with prefix '{}'", lines.len(), prefix);

    for line in lines {
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

/// Parses a report back into a table. Every line is split at its first `=`: the part before is the
/// name as-is, the part after is the value with surrounding whitespace trimmed. Lines without a
/// `=` are ignored and a repeated name keeps its last value.
pub fn parse(text: &str) -> PropertyMap {
    text.lines()
        .filter_map(|line| match line.split_once('=') {
            Some((name, value)) => Some((name, value.trim())),
            None => {
                trace!("Ignoring report line without a separator: {:?}", line);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn sample_table() -> PropertyMap {
        vec![
            ("java.version", "17"),
            ("os.name", "Linux"),
            ("java.vendor", "Acme"),
        ]
        .into_iter()
        .collect()
    }

    fn report(prefix: &str, table: &dyn PropertyTable) -> String {
        let mut out = Vec::new();
        run(prefix, table, &mut out).expect("failed to write report");
        String::from_utf8(out).expect("report isn't valid UTF-8")
    }

    /// Lists a key it has no value for.
    struct Vanishing;

    impl PropertyTable for Vanishing {
        fn keys(&self) -> Vec<&str> {
            vec!["java.gone", "java.here"]
        }

        fn get(&self, key: &str) -> Option<&str> {
            if key == "java.here" {
                Some("yes")
            } else {
                None
            }
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn filters_and_sorts() {
        assert_eq!(
            report("java.", &sample_table()),
            "java.vendor=Acme\njava.version=17\n"
        );
    }

    #[test]
    fn no_matches_writes_nothing() {
        assert_eq!(report("user.", &sample_table()), "");
        assert_eq!(report("java.", &PropertyMap::new()), "");
    }

    #[test]
    fn unordered_source_is_sorted() {
        let mut table = HashMap::new();
        for (k, v) in &[
            ("java.vm.name", "OpenJDK 64-Bit Server VM"),
            ("java.Z", "upper"),
            ("java.a", "lower"),
            ("java.home", "/usr/lib/jvm/java-17"),
            ("javax.net", "excluded"),
            ("path.separator", ":"),
        ] {
            table.insert(String::from(*k), String::from(*v));
        }

        let lines = lines("java.", &table);
        let names = lines.iter().map(|l| l.name).collect::<Vec<_>>();

        assert_eq!(names, vec!["java.Z", "java.a", "java.home", "java.vm.name"]);
        assert!(names.windows(2).all(|w| w[0] < w[1]));
        assert!(names.iter().all(|n| n.starts_with("java.")));
    }

    #[test]
    fn line_count_matches_prefixed_keys() {
        let table = sample_table();
        let expected = table.keys().iter().filter(|k| k.starts_with("java.")).count();

        assert_eq!(lines("java.", &table).len(), expected);
        assert_eq!(report("java.", &table).lines().count(), expected);
    }

    #[test]
    fn idempotent() {
        let table = sample_table();
        assert_eq!(report("java.", &table), report("java.", &table));
    }

    #[test]
    fn values_keep_separators() {
        let table: PropertyMap = vec![("java.class.path", "a.jar:b=c.jar")].into_iter().collect();
        assert_eq!(report("java.", &table), "java.class.path=a.jar:b=c.jar\n");
    }

    #[test]
    fn missing_value_is_skipped() {
        assert_eq!(
            lines("java.", &Vanishing),
            vec![ReportLine {
                name: "java.here",
                value: "yes"
            }]
        );
    }

    #[test]
    fn write_failure_propagates() {
        let err = run("java.", &sample_table(), &mut BrokenPipe).expect_err("write succeeded");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn parse_report() {
        let parsed = parse("java.home=/opt/jdk \r\nnot a property\njava.class.path=a=b\n\n");

        assert_eq!(
            parsed.iter().collect::<Vec<_>>(),
            vec![("java.class.path", "a=b"), ("java.home", "/opt/jdk")]
        );
    }

    #[test]
    fn parse_keeps_last_duplicate() {
        let parsed = parse("java.version=11\njava.version=17\n");
        assert_eq!(PropertyTable::get(&parsed, "java.version"), Some("17"));
    }

    #[test]
    fn parse_reads_back_report() {
        let table = sample_table();
        assert_eq!(parse(&report("java.", &table)), table.with_prefix("java."));
    }
}
