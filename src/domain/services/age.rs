use crate::domain::model::AgeBreakdown;
use crate::utils::error::{Result, ToolError};
use chrono::{Datelike, NaiveDate};

/// 出生日到指定日的完整年/月/日差，外加總天數
pub fn calculate_age(birth_date: NaiveDate, as_of: NaiveDate) -> Result<AgeBreakdown> {
    if birth_date > as_of {
        return Err(ToolError::InvalidFieldValue {
            field: "birth_date".to_string(),
            value: birth_date.to_string(),
            reason: "Birth date cannot be in the future".to_string(),
        });
    }

    let mut years = as_of.year() - birth_date.year();
    let mut months = as_of.month() as i32 - birth_date.month() as i32;
    let mut days = as_of.day() as i32 - birth_date.day() as i32;

    if days < 0 {
        // 向 as_of 的前一個月借天數
        months -= 1;
        let (borrow_year, borrow_month) = if as_of.month() == 1 {
            (as_of.year() - 1, 12)
        } else {
            (as_of.year(), as_of.month() - 1)
        };
        days += days_in_month(borrow_year, borrow_month);
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    Ok(AgeBreakdown {
        years: years as u32,
        months: months as u32,
        days: days as u32,
        total_days: (as_of - birth_date).num_days(),
    })
}

fn days_in_month(year: i32, month: u32) -> i32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, next_first) {
        (Some(a), Some(b)) => (b - a).num_days() as i32,
        _ => 30,
    }
}
