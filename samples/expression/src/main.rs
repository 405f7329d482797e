//! expression-sample
//!
//! Evaluates a fixed set of arithmetic expressions through both the
//! `Disjunction` and the `Attempt` evaluator and logs every outcome.
//!
//! ```bash
//! RUST_LOG=expression_sample=debug,sumkit=debug cargo run -p expression-sample
//! ```

use expression_sample::Expression;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn demonstrations() -> Vec<Expression> {
    vec![
        Expression::add(
            Expression::divide(Expression::number(10), Expression::number(2)),
            Expression::number(3),
        ),
        Expression::subtract(
            Expression::number(4),
            Expression::multiply(Expression::number(6), Expression::number(7)),
        ),
        Expression::divide(
            Expression::number(1),
            Expression::subtract(Expression::number(2), Expression::number(2)),
        ),
        Expression::add(Expression::number(i64::MAX), Expression::number(1)),
    ]
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "expression_sample=info,sumkit=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    for expression in demonstrations() {
        expression.evaluate().fold(
            |error| tracing::warn!(%expression, %error, "evaluation failed"),
            |value| tracing::info!(%expression, value, "evaluated"),
        );

        let attempt = expression.evaluate_attempt();
        let agrees = attempt.clone().to_optional() == expression.evaluate().right();
        let fallback = attempt.get_or_else(|| 0);
        tracing::debug!(%expression, agrees, fallback, "attempt evaluator checked");
    }
}
