//! Shared head content injected into every page

/// Content of the `viewport` meta tag
pub const VIEWPORT_CONTENT: &str =
    "width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no";

/// Responsive base rules plus the spinner classes
pub const BASE_STYLESHEET: &str = r#"
html {
    width: 100%;
}
body {
    width: 100%;
    min-height: 100%;
}

@media (orientation: landscape) and (max-height: 500px) {
    h1, .game-title {
        font-size: 18px !important;
        margin-bottom: 5px !important;
    }
    .container, .game-container {
        padding: 8px !important;
    }
    .controls, .game-controls {
        margin-bottom: 6px !important;
    }
    .number-pad, .game-pad {
        gap: 4px !important;
        margin-top: 6px !important;
    }
    .sudoku-grid, .game-grid {
        margin: 6px auto !important;
    }
}

@media (max-width: 360px) {
    h1, .game-title   { font-size: 20px !important; }
    .sudoku-cell      { font-size: 14px !important; }
    .number-pad button { font-size: 14px !important; }
    button            { padding: 6px 10px !important; font-size: 11px !important; }
}

.cjs-spinner-wrap {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 12px;
    width: 100%;
    height: 100%;
    min-height: 200px;
    background: #f0f4ff;
    border-radius: 4px;
}
.cjs-spinner {
    width: 44px;
    height: 44px;
    border: 5px solid #d0d8f0;
    border-top-color: #667eea;
    border-radius: 50%;
    animation: cjs-spin 0.8s linear infinite;
}
@keyframes cjs-spin { to { transform: rotate(360deg); } }
.cjs-spinner-text {
    font-size: 14px;
    font-weight: bold;
    color: #764ba2;
    letter-spacing: 0.03em;
}
"#;
