use almanac::{GregorianDate, Julian, JulianDate};

fn main() -> Result<(), almanac::CalendarError> {
    let today = GregorianDate::today()?;
    let julian: JulianDate = today.to::<Julian>()?;

    println!("{today} ({})", today.weekday_name());
    println!("{julian} ({})", julian.weekday_name());
    println!("{}", today.julian_day());

    let mut cursor = julian;
    cursor.add_days(30)?;
    println!("in 30 days: {cursor}");
    Ok(())
}
