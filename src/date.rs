#[cfg(target_arch = "wasm32")]
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_year() -> i32 {
    2025
}

/// Experience counter shown in the about section, clamped so a freshly
/// started year never reads as zero.
pub fn years_of_experience(start_year: i32, current_year: i32) -> i32 {
    (current_year - start_year).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_full_years_since_start() {
        assert_eq!(years_of_experience(2022, 2025), 3);
    }

    #[test]
    fn never_drops_below_one() {
        assert_eq!(years_of_experience(2022, 2022), 1);
        assert_eq!(years_of_experience(2022, 2021), 1);
    }
}
