use serde::Serialize;
use std::time::Instant;

/// Timing information for a single pipeline step
#[derive(Debug, Clone, Serialize)]
pub struct StepTiming {
    pub name: String,
    pub time_ms: u64,
}

/// Run one step, recording how long it took
pub fn run_step<T, R, F>(name: &str, input: T, timings: &mut Vec<StepTiming>, step_fn: F) -> R
where
    F: FnOnce(T) -> R,
{
    let step_start = Instant::now();
    let result = step_fn(input);
    let time_ms = step_start.elapsed().as_millis() as u64;
    tracing::debug!("Step {} finished in {}ms", name, time_ms);
    timings.push(StepTiming {
        name: name.to_string(),
        time_ms,
    });
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_step_records_name_in_order() {
        let mut timings = Vec::new();
        let doubled = run_step("double", 21, &mut timings, |x| x * 2);
        let text = run_step("format", doubled, &mut timings, |x| x.to_string());
        assert_eq!(text, "42");
        let names: Vec<&str> = timings.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["double", "format"]);
    }
}
