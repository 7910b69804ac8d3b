use jiff::civil::Date;
use jiff::Unit;

use sprout_engine::EngineError;
use sprout_engine::lifecycle::AgeCalculator;

/// Whole calendar months between a birth date and an evaluation date.
pub struct CalendarAgeCalculator;

impl AgeCalculator for CalendarAgeCalculator {
    fn age_in_months(&self, birth_date: Date, on: Date) -> Result<u32, EngineError> {
        if on < birth_date {
            return Err(EngineError::AgeCalculation(format!(
                "evaluation date {on} is before birth date {birth_date}"
            )));
        }
        let span = birth_date
            .until((Unit::Month, on))
            .map_err(|e| EngineError::AgeCalculation(e.to_string()))?;
        u32::try_from(span.get_months()).map_err(|e| EngineError::AgeCalculation(e.to_string()))
    }
}
