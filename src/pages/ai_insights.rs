//! AI Insights Page
//!
//! Failure forecasts, section risk heatmap, recommendations and model stats.

use leptos::prelude::*;
use leptos_charts::{LineChart, ProgressBar, ScatterChart, ScatterPoint, Series};

use crate::components::{format_thousands, Card};
use crate::mock_data::{self, Recommendation};
use crate::models::{Priority, RiskBand};

pub fn high_priority_count(recommendations: &[Recommendation]) -> usize {
    recommendations.iter().filter(|r| r.priority == Priority::High).count()
}

/// Days-to-failure badge turns red once the current risk reaches 60
pub fn forecast_badge(current_risk: u32) -> &'static str {
    if current_risk >= 60 {
        "badge destructive"
    } else {
        "badge warning"
    }
}

fn risk_text_class(score: u32) -> &'static str {
    RiskBand::from_score(score.min(100) as u8).text_class()
}

#[component]
pub fn AiInsights() -> impl IntoView {
    let performance = mock_data::model_performance();
    let forecasts = mock_data::risk_forecasts();
    let recommendations = mock_data::recommendations();
    let active_predictions = forecasts.len();
    let high_priority = high_priority_count(&recommendations);

    let forecast_cards = forecasts
        .into_iter()
        .map(|f| view! {
            <div class="list-row column">
                <div class="row-between">
                    <h4>{f.component}</h4>
                    <span class=forecast_badge(f.current_risk)>{format!("{} days", f.days_to_failure)}</span>
                </div>
                <div class="row-between small">
                    <span>"Risk Level"</span>
                    <span class=risk_text_class(f.predicted_risk)>
                        {format!("{}% → {}%", f.current_risk, f.predicted_risk)}
                    </span>
                </div>
                <ProgressBar value={f.predicted_risk as f64} />
                <div class="row-between muted tiny">
                    <span>{format!("Confidence: {}%", f.confidence)}</span>
                    <span>{format!("Days to predicted failure: {}", f.days_to_failure)}</span>
                </div>
            </div>
        })
        .collect_view();

    let heatmap: Vec<ScatterPoint> = mock_data::section_risks()
        .into_iter()
        .map(|s| ScatterPoint {
            x: s.track_load as f64,
            y: s.weather_exposure as f64,
            label: format!("{}: risk score {}", s.section, s.risk_score),
        })
        .collect();

    let recommendation_cards = recommendations
        .into_iter()
        .map(|rec| view! {
            <div class="list-row column">
                <div class="row-between">
                    <div class="row">
                        <span class=rec.priority.badge_class()>{rec.priority.as_str().to_uppercase()}</span>
                        <h4>{rec.title}</h4>
                    </div>
                    <div class="align-right">
                        <p class="small strong text-green">{rec.potential_savings}</p>
                        <p class="muted tiny">"Potential Savings"</p>
                    </div>
                </div>
                <p class="muted small">{rec.description}</p>
                <div class="row-between">
                    <p class="small"><strong>"Recommended Action: "</strong>{rec.action}</p>
                    <span class="tiny">{format!("Confidence: {}%", rec.confidence)}</span>
                </div>
            </div>
        })
        .collect_view();

    let trend = mock_data::prediction_trend();
    let trend_categories: Vec<String> = trend.iter().map(|p| p.month.to_string()).collect();
    let trend_series = vec![
        Series::new("predicted", "#8b5cf6", trend.iter().map(|p| p.predicted as f64)).dashed(),
        Series::with_gaps("actual", "#22c55e", trend.iter().map(|p| p.actual.map(f64::from)).collect()),
    ];

    let metrics = [
        ("Accuracy", performance.accuracy),
        ("Precision", performance.precision),
        ("Recall", performance.recall),
        ("F1 Score", performance.f1_score),
    ]
    .into_iter()
    .map(|(label, value)| view! {
        <div class="row-between">
            <span>{label}</span>
            <div class="row">
                <ProgressBar value={value as f64} class="w-20" />
                <span class="small strong">{format!("{}%", value)}</span>
            </div>
        </div>
    })
    .collect_view();

    view! {
        <div class="page ai-insights">
            <Card title="AI-Powered Insights" description="Machine learning driven predictions and recommendations for railway fitting maintenance">
                <div class="grid cols-4 centered">
                    <div>
                        <p class="stat-value text-blue">{format!("{}%", performance.accuracy)}</p>
                        <p class="muted small">"Model Accuracy"</p>
                    </div>
                    <div>
                        <p class="stat-value text-green">{active_predictions}</p>
                        <p class="muted small">"Active Predictions"</p>
                    </div>
                    <div>
                        <p class="stat-value text-orange">{high_priority}</p>
                        <p class="muted small">"High Priority Alerts"</p>
                    </div>
                    <div>
                        <p class="stat-value text-purple">"₹8.7L"</p>
                        <p class="muted small">"Potential Savings"</p>
                    </div>
                </div>
            </Card>

            <div class="grid cols-2">
                <Card title="Predictive Maintenance" description="AI predictions for component failures">
                    <div class="stack">{forecast_cards}</div>
                </Card>
                <Card title="Risk Heatmap" description="Risk distribution across track sections">
                    <ScatterChart points=heatmap x_label="Track Load" y_label="Weather Exposure" />
                </Card>
            </div>

            <Card title="AI Recommendations" description="Intelligent suggestions based on data analysis">
                <div class="stack">{recommendation_cards}</div>
            </Card>

            <Card title="Prediction vs Reality" description="Model accuracy tracking over time">
                <LineChart categories=trend_categories series=trend_series />
            </Card>

            <div class="grid cols-2">
                <Card title="Model Performance" description="Current AI model statistics">
                    <div class="stack">{metrics}</div>
                </Card>
                <Card title="Training Information" description="Model training and data details">
                    <div class="stack">
                        <div class="row-between">
                            <span>"Last Trained:"</span>
                            <span class="strong">{performance.last_trained.format("%Y-%m-%d").to_string()}</span>
                        </div>
                        <div class="row-between">
                            <span>"Training Data Points:"</span>
                            <span class="strong">{format_thousands(performance.data_points)}</span>
                        </div>
                        <div class="row-between">
                            <span>"Model Version:"</span>
                            <span class="strong">"v2.1.3"</span>
                        </div>
                        <div class="row-between">
                            <span>"Next Training:"</span>
                            <span class="strong">"2024-10-01"</span>
                        </div>
                    </div>
                </Card>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_priority_count() {
        assert_eq!(high_priority_count(&mock_data::recommendations()), 1);
        assert_eq!(high_priority_count(&[]), 0);
    }

    #[test]
    fn test_forecast_badge_threshold() {
        assert_eq!(forecast_badge(65), "badge destructive");
        assert_eq!(forecast_badge(60), "badge destructive");
        assert_eq!(forecast_badge(59), "badge warning");
    }

    #[test]
    fn test_risk_text_class_saturates() {
        assert_eq!(risk_text_class(85), "risk-critical");
        assert_eq!(risk_text_class(250), "risk-critical");
        assert_eq!(risk_text_class(55), "risk-medium");
    }
}
