// src/scoreboard/fields.rs
// Cell parsers, one per composite mod_status column.

use crate::config::consts::{ACC_SEP, DEAD_PID, SRV_SEP};
use crate::data::{AccessCounts, WorkerStatus};
use crate::error::FieldError;

/// "Srv" is `<child server number>-<generation>`.
pub fn parse_srv(s: &str) -> Result<(u32, u32), FieldError> {
    let (server, generation) = s.split_once(SRV_SEP).ok_or(FieldError::SrvFormat)?;
    Ok((server.parse()?, generation.parse()?))
}

/// "PID" is a number, or `-` for a dead slot.
pub fn parse_pid(s: &str) -> Result<Option<i32>, FieldError> {
    match s {
        DEAD_PID => Ok(None),
        pid => Ok(Some(pid.parse()?)),
    }
}

/// "Acc" is `<connection>/<child>/<slot>`.
pub fn parse_acc(s: &str) -> Result<AccessCounts, FieldError> {
    let parts: Vec<&str> = s.split(ACC_SEP).collect();
    let [connection, child, slot] = parts.as_slice() else {
        return Err(FieldError::AccessCountsFormat);
    };
    Ok(AccessCounts {
        connection: connection.parse()?,
        child: child.parse()?,
        slot: slot.parse()?,
    })
}

/// "M" is a single scoreboard key character.
pub fn parse_status(s: &str) -> Result<WorkerStatus, FieldError> {
    let mut chars = s.chars();
    let (Some(code), None) = (chars.next(), chars.next()) else {
        return Err(FieldError::StatusCodeMustBeChar);
    };
    WorkerStatus::from_code(code).ok_or(FieldError::InvalidStatusCode(code))
}

pub fn parse_u64(s: &str) -> Result<u64, FieldError> {
    Ok(s.parse()?)
}

/// Finite floats only; `NaN` and `inf` would turn into `null` in the JSON.
pub fn parse_f64(s: &str) -> Result<f64, FieldError> {
    let v: f64 = s.parse()?;
    if !v.is_finite() {
        return Err(FieldError::NotFinite);
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srv() {
        assert_eq!(parse_srv("3-1"), Ok((3, 1)));
        assert_eq!(parse_srv("31"), Err(FieldError::SrvFormat));
        assert!(matches!(parse_srv("a-1"), Err(FieldError::ParseInt(_))));
        assert!(matches!(parse_srv("1-2-3"), Err(FieldError::ParseInt(_))));
    }

    #[test]
    fn pid() {
        assert_eq!(parse_pid("1201"), Ok(Some(1201)));
        assert_eq!(parse_pid("-"), Ok(None));
        assert!(parse_pid("").is_err());
    }

    #[test]
    fn acc() {
        assert_eq!(
            parse_acc("0/12/30"),
            Ok(AccessCounts { connection: 0, child: 12, slot: 30 })
        );
        assert_eq!(parse_acc("1/2"), Err(FieldError::AccessCountsFormat));
        assert_eq!(parse_acc("1/2/3/4"), Err(FieldError::AccessCountsFormat));
    }

    #[test]
    fn status() {
        assert_eq!(parse_status("W"), Ok(WorkerStatus::BusyWrite));
        assert_eq!(parse_status("_"), Ok(WorkerStatus::Ready));
        assert_eq!(parse_status("."), Ok(WorkerStatus::Dead));
        assert_eq!(parse_status("X"), Err(FieldError::InvalidStatusCode('X')));
        assert_eq!(parse_status(""), Err(FieldError::StatusCodeMustBeChar));
        assert_eq!(parse_status("WK"), Err(FieldError::StatusCodeMustBeChar));
    }

    #[test]
    fn numbers() {
        assert_eq!(parse_u64("152"), Ok(152));
        assert_eq!(parse_f64("0.08"), Ok(0.08));
        assert!(matches!(parse_f64("n/a"), Err(FieldError::ParseFloat(_))));
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        for raw in ["NaN", "nan", "inf", "-inf", "infinity", "1e400"] {
            assert_eq!(parse_f64(raw), Err(FieldError::NotFinite), "{raw}");
        }
        assert_eq!(parse_f64("-0.0"), Ok(-0.0));
    }
}
