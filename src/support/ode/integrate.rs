use std::cell::Cell;

use ode_solvers::{
    Dopri5, SVector, System,
    dop_shared::{IntegrationError, OutputType},
};

use crate::support::constraint::StrictlyPositive;

use super::{IntegratorConfig, OdeError, OdeSystem, Point, Solution, Stats, Status, Truncation};

const SAFETY: f64 = 0.9;
const BETA: f64 = 0.04;
const MIN_FACTOR: f64 = 0.2;
const MAX_FACTOR: f64 = 10.0;

/// Integrates `system` over `span` starting from `y0`.
///
/// The state is reported at each time yielded by `evaluation_times`, which
/// must be strictly increasing and lie within `span`. Times are consumed
/// lazily as the output is assembled.
///
/// The main pass runs Dormand–Prince 5(4) over the whole span with error
/// control alone, so its steps do not depend on the evaluation times. Each
/// time falling inside an accepted step is then reached by a short restart
/// of the solver from the start of that step, which keeps every reported
/// state at the accuracy of the accepted steps.
///
/// # Errors
///
/// Returns an [`OdeError`] if the configuration, span, initial state or
/// evaluation times are invalid. Running out of steps is not an error: the
/// returned [`Solution`] is marked [`Status::Truncated`] instead.
pub fn integrate<S, I, const N: usize>(
    system: &S,
    span: (f64, f64),
    y0: [f64; N],
    evaluation_times: I,
    config: &IntegratorConfig,
) -> Result<Solution<N>, OdeError>
where
    S: OdeSystem<N>,
    I: IntoIterator<Item = f64>,
{
    config.validate()?;

    let (start, end) = span;
    if !start.is_finite() || !end.is_finite() {
        return Err(OdeError::NonFiniteSpan);
    }
    StrictlyPositive::new(end - start).map_err(OdeError::Span)?;
    if y0.iter().any(|v| !v.is_finite()) {
        return Err(OdeError::NonFiniteInitialState);
    }

    let evaluations = Cell::new(0);
    let rhs = Rhs {
        system,
        evaluations: &evaluations,
    };

    let first_step = config.first_step.unwrap_or(0.0);
    let max_step = config.max_step.min(end - start);
    let (steps, outcome) = run(
        &rhs,
        Point { t: start, y: y0 },
        end,
        (first_step, max_step),
        config,
    );

    let accepted = steps.len() - 1;
    let mut status = match outcome {
        Ok(()) => Status::Completed,
        Err(error) => Status::Truncated(truncation(&error, last_time(&steps))),
    };
    let reached = match status {
        Status::Completed => end,
        Status::Truncated(_) => last_time(&steps),
    };

    let times = evaluation_times.into_iter();
    let mut points = Vec::with_capacity(times.size_hint().0);
    let mut previous: Option<f64> = None;
    let mut step = 0;

    for time in times {
        if !(start..=end).contains(&time) {
            return Err(OdeError::EvaluationTimeOutOfSpan { time, start, end });
        }
        if let Some(previous) = previous {
            if time <= previous {
                return Err(OdeError::UnorderedEvaluationTimes { previous, time });
            }
        }
        previous = Some(time);

        if time > reached {
            break;
        }

        while step + 1 < steps.len() && steps[step + 1].t <= time {
            step += 1;
        }
        let from = steps[step];

        let resolution = 4.0 * f64::EPSILON * time.abs().max(from.t.abs());
        let y = if time - from.t <= resolution {
            from.y
        } else {
            let interval = time - from.t;
            let (restart, outcome) = run(&rhs, from, time, (interval, interval), config);
            if let Err(error) = outcome {
                status = Status::Truncated(truncation(&error, from.t));
                break;
            }
            restart[restart.len() - 1].y
        };

        points.push(Point { t: time, y });
    }

    let stats = Stats {
        accepted,
        evaluations: evaluations.get(),
    };

    match status {
        Status::Completed => log::debug!(
            "integrated [{start}, {end}]: {} accepted steps, {} evaluations",
            stats.accepted,
            stats.evaluations,
        ),
        Status::Truncated(reason) => log::warn!(
            "integration stopped early: {reason:?} ({} accepted steps)",
            stats.accepted,
        ),
    }

    Ok(Solution {
        points,
        status,
        stats,
    })
}

/// Adapts an [`OdeSystem`] to the solver, counting evaluations.
struct Rhs<'a, S, const N: usize> {
    system: &'a S,
    evaluations: &'a Cell<usize>,
}

impl<S: OdeSystem<N>, const N: usize> System<f64, SVector<f64, N>> for &Rhs<'_, S, N> {
    fn system(&self, t: f64, y: &SVector<f64, N>, dy: &mut SVector<f64, N>) {
        self.evaluations.set(self.evaluations.get() + 1);
        let state: [f64; N] = std::array::from_fn(|i| y[i]);
        for (slot, value) in dy.iter_mut().zip(self.system.derivative(t, &state)) {
            *slot = value;
        }
    }
}

/// Runs the solver from `from` to `end`, returning `from` followed by every
/// accepted step, even when the run fails part way.
fn run<S, const N: usize>(
    rhs: &Rhs<'_, S, N>,
    from: Point<N>,
    end: f64,
    (first_step, max_step): (f64, f64),
    config: &IntegratorConfig,
) -> (Vec<Point<N>>, Result<(), IntegrationError>)
where
    S: OdeSystem<N>,
{
    let mut stepper = Dopri5::from_param(
        rhs,
        from.t,
        end,
        0.0,
        SVector::from(from.y),
        config.rel_tol,
        config.abs_tol,
        SAFETY,
        BETA,
        MIN_FACTOR,
        MAX_FACTOR,
        max_step,
        first_step,
        config.max_steps,
        config.stiffness_test_after,
        OutputType::Sparse,
    );
    let outcome = stepper.integrate().map(|_| ());

    let mut steps = vec![from];
    let (times, states) = stepper.results().get();
    for (&t, y) in times.iter().zip(states) {
        if t > last_time(&steps) {
            steps.push(Point {
                t,
                y: std::array::from_fn(|i| y[i]),
            });
        }
    }

    (steps, outcome)
}

fn last_time<const N: usize>(steps: &[Point<N>]) -> f64 {
    steps.last().map_or(f64::NAN, |point| point.t)
}

fn truncation(error: &IntegrationError, t: f64) -> Truncation {
    match error {
        IntegrationError::MaxNumStepReached { .. } => Truncation::StepLimit { t },
        IntegrationError::StepSizeUnderflow { .. } => Truncation::StepSizeUnderflow { t },
        IntegrationError::StiffnessDetected { .. } => Truncation::Stiffness { t },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::ode::EvaluationGrid;

    /// Undamped oscillator, y'' = -y.
    fn oscillator(_t: f64, y: &[f64; 2]) -> [f64; 2] {
        [y[1], -y[0]]
    }

    #[test]
    fn oscillator_matches_closed_form() {
        let solution = integrate(
            &oscillator,
            (0.0, 10.0),
            [1.0, 0.0],
            EvaluationGrid::linspace(0.0, 10.0, 101),
            &IntegratorConfig::default(),
        )
        .unwrap();

        assert_eq!(solution.status, Status::Completed);
        assert_eq!(solution.points.len(), 101);
        for point in &solution.points {
            assert_relative_eq!(point.y[0], point.t.cos(), epsilon = 1e-4);
            assert_relative_eq!(point.y[1], -point.t.sin(), epsilon = 1e-4);
        }
    }

    /// Distance from the exact oscillator state at `point.t`.
    fn oscillator_error(point: &Point<2>) -> f64 {
        (point.y[0] - point.t.cos()).hypot(point.y[1] + point.t.sin())
    }

    #[test]
    fn samples_between_steps_keep_step_accuracy() {
        let config = IntegratorConfig::default();
        let coarse = integrate(&oscillator, (0.0, 10.0), [1.0, 0.0], [10.0], &config).unwrap();
        let step_error = oscillator_error(&coarse.points[0]);

        let fine = integrate(
            &oscillator,
            (0.0, 10.0),
            [1.0, 0.0],
            EvaluationGrid::linspace(0.0, 10.0, 10_001),
            &config,
        )
        .unwrap();

        // Error grows with time, so no sample should be much worse than the end.
        let worst = fine.points.iter().map(oscillator_error).fold(0.0, f64::max);
        assert!(
            worst <= 2.0 * step_error.max(1e-7),
            "worst sample error {worst:e} vs step error {step_error:e}"
        );
    }

    #[test]
    fn endpoint_does_not_depend_on_grid() {
        let config = IntegratorConfig::default();
        let coarse = integrate(&oscillator, (0.0, 3.0), [1.0, 0.0], [0.0, 3.0], &config).unwrap();
        let fine = integrate(
            &oscillator,
            (0.0, 3.0),
            [1.0, 0.0],
            EvaluationGrid::linspace(0.0, 3.0, 30_001),
            &config,
        )
        .unwrap();

        assert_eq!(coarse.stats.accepted, fine.stats.accepted);

        let a = coarse.points.last().unwrap();
        let b = fine.points.last().unwrap();
        assert_relative_eq!(a.t, 3.0);
        assert_relative_eq!(b.t, 3.0);
        assert_relative_eq!(a.y[0], b.y[0], epsilon = 1e-9);
        assert_relative_eq!(a.y[1], b.y[1], epsilon = 1e-9);
    }

    #[test]
    fn step_limit_truncates_with_partial_output() {
        let config = IntegratorConfig {
            max_steps: 5,
            first_step: Some(1e-3),
            ..IntegratorConfig::default()
        };
        let solution = integrate(
            &oscillator,
            (0.0, 100.0),
            [1.0, 0.0],
            EvaluationGrid::linspace(0.0, 100.0, 1001),
            &config,
        )
        .unwrap();

        assert!(matches!(
            solution.status,
            Status::Truncated(Truncation::StepLimit { .. })
        ));
        assert!(!solution.points.is_empty());
        assert!(solution.points.len() < 1001);
        assert_relative_eq!(solution.points[0].y[0], 1.0);
    }

    #[test]
    fn blow_up_is_truncated() {
        // y' = y², y(0) = 1 diverges at t = 1.
        let blow_up = |_t: f64, y: &[f64; 1]| [y[0] * y[0]];
        let config = IntegratorConfig::default();
        let solution = integrate(&blow_up, (0.0, 2.0), [1.0], [0.5, 2.0], &config).unwrap();

        assert!(solution.status.is_truncated());
        assert_eq!(solution.points.len(), 1);
        assert_relative_eq!(solution.points[0].y[0], 2.0, epsilon = 1e-5);
    }

    #[test]
    fn rejects_invalid_inputs() {
        let config = IntegratorConfig::default();

        assert!(matches!(
            integrate(&oscillator, (1.0, 1.0), [1.0, 0.0], [1.0], &config),
            Err(OdeError::Span(_))
        ));
        assert_eq!(
            integrate(&oscillator, (0.0, f64::INFINITY), [1.0, 0.0], [0.0], &config).unwrap_err(),
            OdeError::NonFiniteSpan
        );
        assert_eq!(
            integrate(&oscillator, (0.0, 1.0), [f64::NAN, 0.0], [0.0], &config).unwrap_err(),
            OdeError::NonFiniteInitialState
        );
        assert_eq!(
            integrate(&oscillator, (0.0, 1.0), [1.0, 0.0], [0.5, 1.5], &config).unwrap_err(),
            OdeError::EvaluationTimeOutOfSpan {
                time: 1.5,
                start: 0.0,
                end: 1.0
            }
        );
        assert_eq!(
            integrate(&oscillator, (0.0, 1.0), [1.0, 0.0], [0.5, 0.5], &config).unwrap_err(),
            OdeError::UnorderedEvaluationTimes {
                previous: 0.5,
                time: 0.5
            }
        );
    }

    #[test]
    fn empty_grid_reports_nothing() {
        let solution = integrate(
            &oscillator,
            (0.0, 1.0),
            [1.0, 0.0],
            std::iter::empty(),
            &IntegratorConfig::default(),
        )
        .unwrap();

        assert_eq!(solution.status, Status::Completed);
        assert!(solution.points.is_empty());
        assert!(solution.stats.accepted > 0);
    }
}
