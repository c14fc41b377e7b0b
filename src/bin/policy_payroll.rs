//! Prints the demo roster's salaries using policy-bound employees.
//!
//! Each employee is constructed with a salary policy chosen at the call
//! site; the employee itself never learns which scheme it is paid under.

use rust_decimal::Decimal;
use salary_engine::error::EngineResult;
use salary_engine::models::Employee;
use salary_engine::policy::{FixedRate, HourlyRate};

fn main() -> EngineResult<()> {
    let employees = vec![
        Employee::new(
            "Вася",
            "Пупкин",
            Decimal::from(3),
            Box::new(HourlyRate::new(Decimal::from(1500))?),
        )?,
        Employee::new(
            "Петя",
            "Пупкин",
            Decimal::from(56),
            Box::new(FixedRate::new(Decimal::from(35000))?),
        )?,
    ];

    for person in &employees {
        println!(
            "{} заработал {}",
            person.full_name(),
            person.calculate_salary()
        );
    }

    Ok(())
}
