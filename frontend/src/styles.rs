pub const NAV_ACTIVE: &str = r#"
    .nav-link.active {
        color: var(--primary-blue) !important;
        position: relative;
    }
    .nav-link.active::after {
        content: '';
        position: absolute;
        bottom: -5px;
        left: 0;
        right: 0;
        height: 2px;
        background: var(--primary-blue);
        border-radius: 1px;
    }
"#;

pub const REVEAL: &str = r#"
    .feature-card, .benefit-item, .metric {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .feature-card.animate-in, .benefit-item.animate-in, .metric.animate-in {
        opacity: 1;
        transform: translateY(0);
    }
    .feature-card {
        transition-delay: 0.1s;
    }
    .feature-card:nth-child(2) {
        transition-delay: 0.2s;
    }
    .feature-card:nth-child(3) {
        transition-delay: 0.3s;
    }
"#;

pub const RIPPLE: &str = r#"
    @keyframes ripple {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }
"#;

pub const QUERY_DEMO: &str = r#"
    .submit-query.success-pulse {
        animation: success-pulse 0.6s ease;
    }
    @keyframes success-pulse {
        0% { box-shadow: 0 0 0 0 rgba(5, 150, 105, 0.6); }
        100% { box-shadow: 0 0 0 12px rgba(5, 150, 105, 0); }
    }
    .research-insights .insight {
        padding: 0.5rem 0;
    }
"#;
