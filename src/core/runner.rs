use crate::adapters::browser::dashboard_url;
use crate::config::script::ShowcaseScript;
use crate::core::{BrowserLauncher, DashboardOutcome, Pauser, ShowcaseReport};
use crate::utils::error::Result;
use std::io::Write;
use std::time::{Duration, Instant};

pub const DASHBOARD_OPENED: &str = "Dashboard opened in browser";

pub struct ShowcaseRunner<B: BrowserLauncher, P: Pauser> {
    script: ShowcaseScript,
    browser: B,
    pauser: P,
}

impl<B: BrowserLauncher, P: Pauser> ShowcaseRunner<B, P> {
    pub fn new(script: ShowcaseScript, browser: B, pauser: P) -> Self {
        Self {
            script,
            browser,
            pauser,
        }
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }

    pub fn pauser(&self) -> &P {
        &self.pauser
    }

    /// 依序輸出旁白；每次停頓結束後才印下一段
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<ShowcaseReport> {
        let started = Instant::now();
        tracing::info!("🎬 Starting showcase: {}", self.script.opening.title);

        write_lines(out, &self.script.opening.lines())?;

        let mut dashboard = DashboardOutcome::NotRequested;
        let mut total_pause = Duration::ZERO;

        for step in &self.script.steps {
            tracing::debug!("▶️ Step {}: {}", step.number, step.title);

            writeln!(out, "{}", step.header())?;
            if step.opens_dashboard() {
                dashboard = self.open_dashboard(out)?;
            }
            if let Some(detail) = &step.detail {
                writeln!(out, "{}", detail)?;
            }
            out.flush()?;

            let pause = step.pause();
            if !pause.is_zero() {
                tracing::debug!("⏸️ Pausing {:?} after step {}", pause, step.number);
                self.pauser.pause(pause).await;
                total_pause += pause;
            }
        }

        write_lines(out, &self.script.closing.lines())?;
        out.flush()?;

        let report = ShowcaseReport {
            dashboard,
            steps_run: self.script.steps.len(),
            total_pause,
            elapsed: started.elapsed(),
        };

        tracing::info!(
            "✅ Showcase finished - {} steps, paused {:?}, total time {:?}",
            report.steps_run,
            report.total_pause,
            report.elapsed
        );

        Ok(report)
    }

    fn open_dashboard<W: Write>(&self, out: &mut W) -> Result<DashboardOutcome> {
        let path = &self.script.dashboard_path;

        // 找不到檔案時不輸出任何訊息
        if !path.exists() {
            tracing::debug!("Dashboard not found at {}, skipping browser", path.display());
            return Ok(DashboardOutcome::Missing(path.clone()));
        }

        let url = dashboard_url(path)?;
        self.browser.open(&url)?;
        writeln!(out, "{}", DASHBOARD_OPENED)?;
        tracing::info!("🌐 Dashboard opened: {}", url);

        Ok(DashboardOutcome::Opened(url))
    }
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DemoError;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tempfile::TempDir;
    use url::Url;

    #[derive(Default)]
    struct RecordingBrowser {
        opened: Mutex<Vec<Url>>,
    }

    impl BrowserLauncher for RecordingBrowser {
        fn open(&self, url: &Url) -> Result<()> {
            self.opened.lock().unwrap().push(url.clone());
            Ok(())
        }
    }

    struct FailingBrowser;

    impl BrowserLauncher for FailingBrowser {
        fn open(&self, url: &Url) -> Result<()> {
            Err(DemoError::BrowserLaunchError {
                url: url.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no browser"),
            })
        }
    }

    #[derive(Default)]
    struct RecordingPauser {
        pauses: Mutex<Vec<Duration>>,
    }

    #[async_trait]
    impl Pauser for RecordingPauser {
        async fn pause(&self, duration: Duration) {
            self.pauses.lock().unwrap().push(duration);
        }
    }

    fn script_with_dashboard(temp_dir: &TempDir, create: bool) -> ShowcaseScript {
        let dashboard = temp_dir.path().join("generative-hub/docs/index.html");
        if create {
            std::fs::create_dir_all(dashboard.parent().unwrap()).unwrap();
            std::fs::write(&dashboard, "<html></html>").unwrap();
        }
        ShowcaseScript::embedded()
            .unwrap()
            .with_dashboard_path(dashboard)
    }

    async fn run_to_string<B: BrowserLauncher>(
        runner: &ShowcaseRunner<B, RecordingPauser>,
    ) -> (String, ShowcaseReport) {
        let mut out = Vec::new();
        let report = runner.run(&mut out).await.unwrap();
        (String::from_utf8(out).unwrap(), report)
    }

    #[tokio::test]
    async fn test_missing_dashboard_prints_full_narration() {
        let temp_dir = TempDir::new().unwrap();
        let runner = ShowcaseRunner::new(
            script_with_dashboard(&temp_dir, false),
            RecordingBrowser::default(),
            RecordingPauser::default(),
        );

        let (output, report) = run_to_string(&runner).await;
        let rule = "=".repeat(50);
        let expected = format!(
            "{rule}\nGML ECOSYSTEM 5-MINUTE SHOWCASE\n{rule}\n\n\
             STEP 1: Generative Hub Dashboard\n\
             STEP 2: Quartet Engine Demo\n\
             Generated: Classical quartet in D Major\n\
             STEP 3: RiffGen Pipeline\n\
             RiffGen -> IRM -> SongSketch: Complete song created\n\
             STEP 4: Integration Examples\n\
             mike-gen-libs powering all 12 projects\n\
             STEP 5: Export Complete\n\
             All compositions ready for production\n\
             {rule}\nGML ECOSYSTEM DEMO COMPLETE!\n{rule}\n"
        );

        assert_eq!(output, expected);
        assert!(runner.browser().opened.lock().unwrap().is_empty());
        assert!(matches!(report.dashboard, DashboardOutcome::Missing(_)));
        assert_eq!(report.steps_run, 5);
    }

    #[tokio::test]
    async fn test_existing_dashboard_is_opened_once() {
        let temp_dir = TempDir::new().unwrap();
        let runner = ShowcaseRunner::new(
            script_with_dashboard(&temp_dir, true),
            RecordingBrowser::default(),
            RecordingPauser::default(),
        );

        let (output, report) = run_to_string(&runner).await;

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.iter().filter(|l| **l == DASHBOARD_OPENED).count(), 1);
        // 確認行緊接在 STEP 1 之後
        let step_one = lines
            .iter()
            .position(|l| *l == "STEP 1: Generative Hub Dashboard")
            .unwrap();
        assert_eq!(lines[step_one + 1], DASHBOARD_OPENED);

        let opened = runner.browser().opened.lock().unwrap();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].scheme(), "file");
        assert_eq!(report.dashboard, DashboardOutcome::Opened(opened[0].clone()));
    }

    #[tokio::test]
    async fn test_pauses_follow_steps_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let runner = ShowcaseRunner::new(
            script_with_dashboard(&temp_dir, false),
            RecordingBrowser::default(),
            RecordingPauser::default(),
        );

        let (_, report) = run_to_string(&runner).await;

        let pauses = runner.pauser().pauses.lock().unwrap().clone();
        assert_eq!(
            pauses,
            vec![
                Duration::from_secs(3),
                Duration::from_secs(2),
                Duration::from_secs(2),
                Duration::from_secs(2),
            ]
        );
        assert_eq!(report.total_pause, Duration::from_secs(9));
    }

    #[tokio::test]
    async fn test_browser_failure_propagates() {
        let temp_dir = TempDir::new().unwrap();
        let runner = ShowcaseRunner::new(
            script_with_dashboard(&temp_dir, true),
            FailingBrowser,
            RecordingPauser::default(),
        );

        let mut out = Vec::new();
        let err = runner.run(&mut out).await.unwrap_err();

        assert!(matches!(err, DemoError::BrowserLaunchError { .. }));
        let output = String::from_utf8(out).unwrap();
        assert!(!output.contains(DASHBOARD_OPENED));
        assert!(runner.pauser().pauses.lock().unwrap().is_empty());
    }
}
