//! Built-in grok base patterns.
//!
//! The classic grok base library, rewritten for the `regex` crate: atomic
//! groups become plain non-capturing groups and look-around anchors become
//! word boundaries, since the engine supports neither.

/// Base definitions as `(name, fragment)` pairs.
///
/// Order is irrelevant; names are unique.
pub const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    // ── Basics ──────────────────────────────────────────────────
    ("USERNAME", r#"[a-zA-Z0-9._-]+"#),
    ("USER", r#"%{USERNAME}"#),
    ("EMAILLOCALPART", r#"[a-zA-Z][a-zA-Z0-9_.+=:-]+"#),
    ("EMAILADDRESS", r#"%{EMAILLOCALPART}@%{HOSTNAME}"#),
    ("INT", r#"(?:[+-]?(?:[0-9]+))"#),
    ("BASE10NUM", r#"(?:[+-]?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+))"#),
    ("NUMBER", r#"(?:%{BASE10NUM})"#),
    ("BASE16NUM", r#"(?:[+-]?(?:0x)?(?:[0-9A-Fa-f]+))"#),
    ("BASE16FLOAT", r#"\b(?:[+-]?(?:0x)?(?:(?:[0-9A-Fa-f]+(?:\.[0-9A-Fa-f]*)?)|(?:\.[0-9A-Fa-f]+)))\b"#),
    ("POSINT", r#"\b(?:[1-9][0-9]*)\b"#),
    ("NONNEGINT", r#"\b(?:[0-9]+)\b"#),
    ("WORD", r#"\b\w+\b"#),
    ("NOTSPACE", r#"\S+"#),
    ("SPACE", r#"\s*"#),
    ("DATA", r#".*?"#),
    ("GREEDYDATA", r#".*"#),
    ("QUOTEDSTRING", r#"(?:"(?:\\.|[^\\"])*"|'(?:\\.|[^\\'])*'|`(?:\\.|[^\\`])*`)"#),
    ("QS", r#"%{QUOTEDSTRING}"#),
    ("UUID", r#"[A-Fa-f0-9]{8}-(?:[A-Fa-f0-9]{4}-){3}[A-Fa-f0-9]{12}"#),
    // ── Networking ──────────────────────────────────────────────
    ("MAC", r#"(?:%{CISCOMAC}|%{WINDOWSMAC}|%{COMMONMAC})"#),
    ("CISCOMAC", r#"(?:(?:[A-Fa-f0-9]{4}\.){2}[A-Fa-f0-9]{4})"#),
    ("WINDOWSMAC", r#"(?:(?:[A-Fa-f0-9]{2}-){5}[A-Fa-f0-9]{2})"#),
    ("COMMONMAC", r#"(?:(?:[A-Fa-f0-9]{2}:){5}[A-Fa-f0-9]{2})"#),
    ("IPV6", r#"(?:(?:(?:[0-9A-Fa-f]{1,4}:){7}(?:[0-9A-Fa-f]{1,4}|:))|(?:(?:[0-9A-Fa-f]{1,4}:){6}(?::[0-9A-Fa-f]{1,4}|(?:(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])(?:\.(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])){3})|:))|(?:(?:[0-9A-Fa-f]{1,4}:){5}(?:(?:(?::[0-9A-Fa-f]{1,4}){1,2})|:(?:(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])(?:\.(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])){3})|:))|(?:(?:[0-9A-Fa-f]{1,4}:){4}(?:(?:(?::[0-9A-Fa-f]{1,4}){1,3})|(?:(?::[0-9A-Fa-f]{1,4})?:(?:(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])(?:\.(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])){3}))|:))|(?:(?:[0-9A-Fa-f]{1,4}:){3}(?:(?:(?::[0-9A-Fa-f]{1,4}){1,4})|(?:(?::[0-9A-Fa-f]{1,4}){0,2}:(?:(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])(?:\.(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])){3}))|:))|(?:(?:[0-9A-Fa-f]{1,4}:){2}(?:(?:(?::[0-9A-Fa-f]{1,4}){1,5})|(?:(?::[0-9A-Fa-f]{1,4}){0,3}:(?:(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])(?:\.(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])){3}))|:))|(?:(?:[0-9A-Fa-f]{1,4}:){1}(?:(?:(?::[0-9A-Fa-f]{1,4}){1,6})|(?:(?::[0-9A-Fa-f]{1,4}){0,4}:(?:(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])(?:\.(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])){3}))|:))|(?::(?:(?:(?::[0-9A-Fa-f]{1,4}){1,7})|(?:(?::[0-9A-Fa-f]{1,4}){0,5}:(?:(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])(?:\.(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])){3}))|:)))(?:%[0-9A-Za-z]+)?"#),
    ("IPV4", r#"\b(?:(?:25[0-5]|2[0-4][0-9]|[0-1]?[0-9]{1,2})\.){3}(?:25[0-5]|2[0-4][0-9]|[0-1]?[0-9]{1,2})\b"#),
    ("IP", r#"(?:%{IPV6}|%{IPV4})"#),
    ("HOSTNAME", r#"\b(?:[0-9A-Za-z][0-9A-Za-z-]{0,62})(?:\.(?:[0-9A-Za-z][0-9A-Za-z-]{0,62}))*(?:\.?|\b)"#),
    ("HOST", r#"%{HOSTNAME}"#),
    ("IPORHOST", r#"(?:%{IP}|%{HOSTNAME})"#),
    ("HOSTPORT", r#"%{IPORHOST}:%{POSINT}"#),
    // ── Paths and URIs ──────────────────────────────────────────
    ("PATH", r#"(?:%{UNIXPATH}|%{WINPATH})"#),
    ("UNIXPATH", r#"(?:/(?:[\w_%!$@:.,+~-]+|\\.)*)+"#),
    ("TTY", r#"(?:/dev/(?:pts|tty(?:[pq])?)(?:\w+)?/?(?:[0-9]+))"#),
    ("WINPATH", r#"(?:[A-Za-z]+:|\\)(?:\\[^\\?*]*)+"#),
    ("URIPROTO", r#"[A-Za-z]+(?:\+[A-Za-z+]+)?"#),
    ("URIHOST", r#"%{IPORHOST}(?::%{POSINT:port})?"#),
    ("URIPATH", r#"(?:/[A-Za-z0-9$.+!*'(){},~:;=@#%&_\-]*)+"#),
    ("URIPARAM", r#"\?[A-Za-z0-9$.+!*'|(){},~@#%&/=:;_?\-\[\]<>]*"#),
    ("URIPATHPARAM", r#"%{URIPATH}(?:%{URIPARAM})?"#),
    ("URI", r#"%{URIPROTO}://(?:%{USER}(?::[^@]*)?@)?(?:%{URIHOST})?(?:%{URIPATHPARAM})?"#),
    // ── Dates and times ─────────────────────────────────────────
    ("MONTH", r#"\b(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\b"#),
    ("MONTHNUM", r#"(?:0?[1-9]|1[0-2])"#),
    ("MONTHNUM2", r#"(?:0[1-9]|1[0-2])"#),
    ("MONTHDAY", r#"(?:(?:0[1-9])|(?:[12][0-9])|(?:3[01])|[1-9])"#),
    ("DAY", r#"(?:Mon(?:day)?|Tue(?:sday)?|Wed(?:nesday)?|Thu(?:rsday)?|Fri(?:day)?|Sat(?:urday)?|Sun(?:day)?)"#),
    ("YEAR", r#"(?:[0-9][0-9]){1,2}"#),
    ("HOUR", r#"(?:2[0123]|[01]?[0-9])"#),
    ("MINUTE", r#"(?:[0-5][0-9])"#),
    ("SECOND", r#"(?:(?:[0-5]?[0-9]|60)(?:[:.,][0-9]+)?)"#),
    ("TIME", r#"\b%{HOUR}:%{MINUTE}(?::%{SECOND})\b"#),
    ("DATE_US", r#"%{MONTHNUM}[/-]%{MONTHDAY}[/-]%{YEAR}"#),
    ("DATE_EU", r#"%{MONTHDAY}[./-]%{MONTHNUM}[./-]%{YEAR}"#),
    ("ISO8601_TIMEZONE", r#"(?:Z|[+-]%{HOUR}(?::?%{MINUTE}))"#),
    ("ISO8601_SECOND", r#"(?:%{SECOND}|60)"#),
    ("TIMESTAMP_ISO8601", r#"%{YEAR}-%{MONTHNUM}-%{MONTHDAY}[T ]%{HOUR}:?%{MINUTE}(?::?%{SECOND})?%{ISO8601_TIMEZONE}?"#),
    ("DATE", r#"(?:%{DATE_US}|%{DATE_EU})"#),
    ("DATESTAMP", r#"%{DATE}[- ]%{TIME}"#),
    ("TZ", r#"(?:[PMCE][SD]T|UTC)"#),
    ("DATESTAMP_RFC822", r#"%{DAY} %{MONTH} %{MONTHDAY} %{YEAR} %{TIME} %{TZ}"#),
    ("DATESTAMP_RFC2822", r#"%{DAY}, %{MONTHDAY} %{MONTH} %{YEAR} %{TIME} %{ISO8601_TIMEZONE}"#),
    ("DATESTAMP_OTHER", r#"%{DAY} %{MONTH} %{MONTHDAY} %{TIME} %{TZ} %{YEAR}"#),
    ("DATESTAMP_EVENTLOG", r#"%{YEAR}%{MONTHNUM2}%{MONTHDAY}%{HOUR}%{MINUTE}%{SECOND}"#),
    ("HTTPDATE", r#"%{MONTHDAY}/%{MONTH}/%{YEAR}:%{TIME} %{INT}"#),
    // ── Syslog ──────────────────────────────────────────────────
    ("SYSLOGTIMESTAMP", r#"%{MONTH} +%{MONTHDAY} %{TIME}"#),
    ("PROG", r#"(?:[\w._/%-]+)"#),
    ("SYSLOGPROG", r#"%{PROG:program}(?:\[%{POSINT:pid}\])?"#),
    ("SYSLOGHOST", r#"%{IPORHOST}"#),
    ("SYSLOGFACILITY", r#"<%{NONNEGINT:facility}.%{NONNEGINT:priority}>"#),
    ("SYSLOGBASE", r#"%{SYSLOGTIMESTAMP:timestamp} (?:%{SYSLOGFACILITY} )?%{SYSLOGHOST:logsource} %{SYSLOGPROG}:"#),
    ("SYSLOGBASE2", r#"(?:%{SYSLOGTIMESTAMP:timestamp}|%{TIMESTAMP_ISO8601:timestamp8601}) (?:%{SYSLOGFACILITY} )?%{SYSLOGHOST:logsource}+(?: %{SYSLOGPROG}:|)"#),
    ("SYSLOGLINE", r#"%{SYSLOGBASE2} %{GREEDYDATA:message}"#),
    // ── Web servers ─────────────────────────────────────────────
    ("COMMONAPACHELOG", r#"%{IPORHOST:clientip} %{USER:ident} %{USER:auth} \[%{HTTPDATE:timestamp}\] "(?:%{WORD:verb} %{NOTSPACE:request}(?: HTTP/%{NUMBER:httpversion})?|%{DATA:rawrequest})" %{NUMBER:response} (?:%{NUMBER:bytes}|-)"#),
    ("COMBINEDAPACHELOG", r#"%{COMMONAPACHELOG} %{QS:referrer} %{QS:agent}"#),
    // ── Levels ──────────────────────────────────────────────────
    ("LOGLEVEL", r#"(?:[Aa]lert|ALERT|[Tt]race|TRACE|[Dd]ebug|DEBUG|[Nn]otice|NOTICE|[Ii]nfo|INFO|[Ww]arn?(?:ing)?|WARN?(?:ING)?|[Ee]rr?(?:or)?|ERR?(?:OR)?|[Cc]rit?(?:ical)?|CRIT?(?:ICAL)?|[Ff]atal|FATAL|[Ss]evere|SEVERE|EMERG(?:ENCY)?|[Ee]merg(?:ency)?)"#),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_names_unique() {
        let mut seen = HashSet::new();
        for (name, _) in BUILTIN_PATTERNS {
            assert!(seen.insert(*name), "duplicate builtin pattern: {}", name);
        }
    }

    #[test]
    fn test_builtin_names_are_words() {
        for (name, fragment) in BUILTIN_PATTERNS {
            assert!(!name.is_empty());
            assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'), "bad name: {}", name);
            assert!(!fragment.is_empty(), "{} has an empty fragment", name);
        }
    }
}
