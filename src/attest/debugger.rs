//! `TracerPid` inspection of the process status record

const TRACER_PID_KEY: &str = "TracerPid:";

/// What the status record says about an attached tracer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracerStatus {
    /// `TracerPid` is zero
    Detached,
    /// `TracerPid` is nonzero
    Attached(i64),
    /// No `TracerPid` line in the record
    Absent,
    /// The line exists but its value is not an integer
    Unparseable,
}

impl TracerStatus {
    /// Whether this status should deny the gate.
    ///
    /// An unparseable value denies. Only an absent key passes alongside zero.
    pub fn denies(&self) -> bool {
        matches!(self, TracerStatus::Attached(_) | TracerStatus::Unparseable)
    }
}

/// Find the first `TracerPid:` line and classify its value
pub fn parse_tracer_pid(status: &str) -> TracerStatus {
    let Some(line) = status
        .lines()
        .find(|line| line.starts_with(TRACER_PID_KEY))
    else {
        return TracerStatus::Absent;
    };

    match line[TRACER_PID_KEY.len()..].trim().parse::<i64>() {
        Ok(0) => TracerStatus::Detached,
        Ok(pid) => TracerStatus::Attached(pid),
        Err(_) => TracerStatus::Unparseable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN_STATUS: &str = "Name:\tapp_process\nState:\tS (sleeping)\nTgid:\t4242\nPid:\t4242\nPPid:\t1\nTracerPid:\t0\nUid:\t10123\t10123\t10123\t10123\n";

    #[test]
    fn test_clean_status() {
        assert_eq!(parse_tracer_pid(CLEAN_STATUS), TracerStatus::Detached);
        assert!(!parse_tracer_pid(CLEAN_STATUS).denies());
    }

    #[test]
    fn test_attached_tracer() {
        let status = CLEAN_STATUS.replace("TracerPid:\t0", "TracerPid:\t1234");
        assert_eq!(parse_tracer_pid(&status), TracerStatus::Attached(1234));
        assert!(parse_tracer_pid(&status).denies());
    }

    #[test]
    fn test_space_separated_value() {
        assert_eq!(parse_tracer_pid("TracerPid: 1234"), TracerStatus::Attached(1234));
        assert_eq!(parse_tracer_pid("TracerPid:   0  "), TracerStatus::Detached);
    }

    #[test]
    fn test_missing_key() {
        let status = "Name:\tapp\nPid:\t1\n";
        assert_eq!(parse_tracer_pid(status), TracerStatus::Absent);
        assert!(!TracerStatus::Absent.denies());
    }

    #[test]
    fn test_key_must_start_line() {
        assert_eq!(parse_tracer_pid("XTracerPid:\t77\n"), TracerStatus::Absent);
    }

    #[test]
    fn test_garbage_value_fails_closed() {
        assert_eq!(parse_tracer_pid("TracerPid:\tabc\n"), TracerStatus::Unparseable);
        assert_eq!(parse_tracer_pid("TracerPid:\n"), TracerStatus::Unparseable);
        assert!(TracerStatus::Unparseable.denies());
    }

    #[test]
    fn test_first_occurrence_wins() {
        let status = "TracerPid:\t0\nTracerPid:\t99\n";
        assert_eq!(parse_tracer_pid(status), TracerStatus::Detached);
    }
}
