//! Interactive terminal front end. View glue only: everything stateful
//! lives behind the gate, the history store, and the draw controller.

use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::{Local, TimeZone};
use log::warn;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    auth::SessionGate,
    draw::{DrawController, DrawEvent},
    history::HistoryStore,
    models::{Category, QuoteRecord},
    quotes,
};

pub struct Shell {
    gate: SessionGate,
    history: HistoryStore,
    draw: DrawController,
    events: UnboundedReceiver<DrawEvent>,
}

impl Shell {
    pub fn new(
        gate: SessionGate,
        history: HistoryStore,
        draw: DrawController,
        events: UnboundedReceiver<DrawEvent>,
    ) -> Self {
        Self {
            gate,
            history,
            draw,
            events,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        self.login().await?;
        self.main_menu().await
    }

    async fn login(&mut self) -> Result<()> {
        println!("🎂 Welcome");
        println!("请输入开启生日祝福的密钥\n");

        loop {
            let candidate = read_line("输入密码: ").await?;
            if self.gate.attempt_login(&candidate) {
                println!("\n进入成功！\n");
                return Ok(());
            }
            // The failed input is dropped here; the user types it anew.
            if let Some(message) = self.gate.last_error() {
                println!("{message}\n");
            }
        }
    }

    async fn main_menu(&mut self) -> Result<()> {
        loop {
            println!("──────────────────────────────");
            for (index, category) in Category::ALL.into_iter().enumerate() {
                let meta = quotes::meta(category);
                println!("  [{}] {} {}", index + 1, meta.icon, meta.title);
            }
            println!("  [q] 退出");

            let choice = read_line("选择: ").await?;
            match choice.as_str() {
                "1" => self.category_menu(Category::Joy).await?,
                "2" => self.category_menu(Category::Anger).await?,
                "3" => self.category_menu(Category::Sorrow).await?,
                "4" => self.category_menu(Category::Fear).await?,
                "5" => self.category_menu(Category::Birthday).await?,
                "6" => self.category_menu(Category::Answers).await?,
                "q" | "Q" => return Ok(()),
                _ => println!("无效选择\n"),
            }
        }
    }

    async fn category_menu(&mut self, category: Category) -> Result<()> {
        loop {
            let meta = quotes::meta(category);
            println!("\n{} {}", meta.icon, meta.title);
            println!("  [1] ✨ 抽取新的语录");
            println!("  [2] 📜 查看过去抽取 (共 {} 条)", self.history.len(category));
            println!("  [0] 返回");

            let choice = read_line("选择: ").await?;
            match choice.as_str() {
                "1" => self.run_draw(category).await,
                "2" => self.show_history(category),
                _ => {
                    // Leaving the modal cancels any pending animation steps.
                    self.draw.cancel().await;
                    return Ok(());
                }
            }
        }
    }

    async fn run_draw(&mut self, category: Category) {
        if let Err(err) = self.draw.draw(category).await {
            warn!("Draw failed: {err:#}");
            println!("抽取失败：{err}");
            return;
        }

        println!("\n正在连接宇宙信号...");

        while let Some(event) = self.events.recv().await {
            match event {
                DrawEvent::Shuffle { category: c, text, .. } if c == category => {
                    print!("\r  {text}        ");
                    let _ = io::stdout().flush();
                }
                DrawEvent::Settled { category: c, record } if c == category => {
                    println!("\n\nMESSAGE FOR YOU");
                    println!("“{}”\n", record.text);
                    return;
                }
                // Frames from a superseded draw; nothing to render.
                _ => {}
            }
        }
    }

    fn show_history(&self, category: Category) {
        let records = self.history.all(category);
        if records.is_empty() {
            println!("\n还没有记录哦，去抽取一条吧。");
            return;
        }

        println!("\n共 {} 条，最近的在前:", records.len());
        for record in records.iter().rev() {
            println!("  “{}”", record.text);
            println!("      {}", format_timestamp(record));
        }
    }
}

fn format_timestamp(record: &QuoteRecord) -> String {
    match Local.timestamp_millis_opt(record.timestamp).single() {
        Some(instant) => instant.format("%m月%d日 %H:%M").to_string(),
        None => record.timestamp.to_string(),
    }
}

async fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;

    let line = tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        io::stdin()
            .read_line(&mut line)
            .map(|_| line)
            .context("failed to read from stdin")
    })
    .await
    .context("stdin reader task failed")??;

    Ok(line.trim().to_string())
}
