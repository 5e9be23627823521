//! 时间工具函数 — 业务时区的日期校验
//!
//! 日期解析和"不在未来"校验统一在 API handler 层完成，
//! repository 层只接收已经校验过的 `NaiveDate`。

use chrono::NaiveDate;
use chrono_tz::Tz;

use super::{AppError, AppResult};
use shared::ErrorCode;

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        AppError::with_message(
            ErrorCode::ClosureDateInvalid,
            format!("Invalid date format: {}", date),
        )
    })
}

/// 验证日期不在未来 (业务时区)
pub fn validate_not_future(date: NaiveDate, tz: Tz) -> AppResult<()> {
    let today = chrono::Utc::now().with_timezone(&tz).date_naive();
    if date > today {
        return Err(AppError::with_message(
            ErrorCode::ClosureDateInFuture,
            format!("Date {} is in the future (today is {})", date, today),
        ));
    }
    Ok(())
}

/// 校验统计周期的月份 (1-12)
pub fn validate_month(year: i32, month: u32) -> AppResult<()> {
    if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
        return Err(AppError::with_message(
            ErrorCode::StatisticsPeriodInvalid,
            format!("Invalid period: {year}-{month:02}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-14").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
        );
        assert!(parse_date("14/03/2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_date_error_code() {
        let err = parse_date("not-a-date").unwrap_err();
        assert_eq!(err.code, ErrorCode::ClosureDateInvalid);
    }

    #[test]
    fn test_validate_not_future() {
        let tz = chrono_tz::Europe::Rome;
        let yesterday = chrono::Utc::now().with_timezone(&tz).date_naive() - chrono::Days::new(1);
        assert!(validate_not_future(yesterday, tz).is_ok());

        let tomorrow = chrono::Utc::now().with_timezone(&tz).date_naive() + chrono::Days::new(1);
        let err = validate_not_future(tomorrow, tz).unwrap_err();
        assert_eq!(err.code, ErrorCode::ClosureDateInFuture);
    }

    #[test]
    fn test_validate_month() {
        assert!(validate_month(2025, 1).is_ok());
        assert!(validate_month(2025, 12).is_ok());
        assert!(validate_month(2025, 0).is_err());
        assert!(validate_month(2025, 13).is_err());
    }
}
