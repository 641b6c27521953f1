use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Config file picked up from the current directory when `--config` is not given
pub const CONFIG_FILE: &str = "pagefix.toml";

/// Page the tool was written to repair
pub const DEFAULT_TARGET: &str =
    "/Users/choi_eun_jin/Desktop/proj/ai 해커톤/Dreamtoon_FE/src/pages/DreamInputPage.tsx";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PatchConfig {
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub trim: TrimConfig,
    #[serde(default)]
    pub dedent: DedentConfig,
    #[serde(default)]
    pub block: BlockConfig,
    #[serde(default)]
    pub imports: ImportsConfig,
    #[serde(default)]
    pub props: PropsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TargetConfig {
    #[serde(default = "default_target_path")]
    pub path: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            path: default_target_path(),
        }
    }
}

fn default_target_path() -> String {
    DEFAULT_TARGET.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct TrimConfig {
    /// Leading lines discarded as garbage
    #[serde(default = "default_skip_lines")]
    pub skip_lines: usize,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            skip_lines: default_skip_lines(),
        }
    }
}

fn default_skip_lines() -> usize {
    55
}

#[derive(Debug, Deserialize, Clone)]
pub struct DedentConfig {
    #[serde(default = "default_dedent_width")]
    pub width: usize,
}

impl Default for DedentConfig {
    fn default() -> Self {
        Self {
            width: default_dedent_width(),
        }
    }
}

fn default_dedent_width() -> usize {
    6
}

#[derive(Debug, Deserialize, Clone)]
pub struct BlockConfig {
    #[serde(default = "default_block_start")]
    pub start: String,
    #[serde(default = "default_block_end")]
    pub end: String,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            start: default_block_start(),
            end: default_block_end(),
        }
    }
}

fn default_block_start() -> String {
    "const GenerationResult = ({".to_string()
}

fn default_block_end() -> String {
    "// --- Main Page ---".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImportsConfig {
    #[serde(default = "default_import_lines")]
    pub lines: Vec<String>,
}

impl Default for ImportsConfig {
    fn default() -> Self {
        Self {
            lines: default_import_lines(),
        }
    }
}

fn default_import_lines() -> Vec<String> {
    vec![
        "import { useEffect, useRef, useState } from 'react'".to_string(),
        "import { motion, AnimatePresence } from 'framer-motion'".to_string(),
        "import { useNavigate } from 'react-router-dom'".to_string(),
        "import { Mic, Send, Sparkles, Loader2, Save, RotateCcw, MessageCircle, X, Layout, PlayCircle, Heart, Share2, Download, Copy, Check } from 'lucide-react'".to_string(),
        "import GenerationResult from '@/components/common/GenerationResult'".to_string(),
    ]
}

#[derive(Debug, Deserialize, Clone)]
pub struct PropsConfig {
    /// Element whose opening tag receives the props
    #[serde(default = "default_props_element")]
    pub element: String,
    /// Value of the `key` attribute that anchors the injection
    #[serde(default = "default_props_key")]
    pub key: String,
    #[serde(default = "default_props_indent")]
    pub indent: usize,
    #[serde(default = "default_props_attributes")]
    pub attributes: Vec<String>,
}

impl Default for PropsConfig {
    fn default() -> Self {
        Self {
            element: default_props_element(),
            key: default_props_key(),
            indent: default_props_indent(),
            attributes: default_props_attributes(),
        }
    }
}

fn default_props_element() -> String {
    "GenerationResult".to_string()
}

fn default_props_key() -> String {
    "result".to_string()
}

fn default_props_indent() -> usize {
    20
}

fn default_props_attributes() -> Vec<String> {
    vec![
        r#"title="무의식의 숲을 지나서""#.to_string(),
        "date={new Date().toLocaleDateString()}".to_string(),
        r#"mediaUrl="https://images.unsplash.com/photo-1633469924738-52101af51d87?q=80&w=1000&auto=format&fit=crop""#.to_string(),
        "type={selectedFormat}".to_string(),
    ]
}

/// Load and parse a pagefix.toml file
pub fn load_config(path: &str) -> Result<PatchConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("could not find `{}`", path)
            } else {
                anyhow::anyhow!("failed to read `{}`: {}", path, e)
            }
        })?;

    let config: PatchConfig = toml::from_str(&content)
        .map_err(|e| anyhow::anyhow!("failed to parse `{}`: {}", path, e))?;

    validate(&config)?;

    Ok(config)
}

/// Pick the config for this run: an explicit file, then `pagefix.toml`, then built-in defaults
pub fn resolve_config(explicit: Option<&str>) -> Result<PatchConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    if Path::new(CONFIG_FILE).exists() {
        return load_config(CONFIG_FILE);
    }

    Ok(PatchConfig::default())
}

fn validate(config: &PatchConfig) -> Result<()> {
    if config.target.path.trim().is_empty() {
        anyhow::bail!("Invalid config: `target.path` is empty");
    }

    if config.dedent.width == 0 {
        anyhow::bail!("Invalid config: `dedent.width` must be at least 1");
    }

    if config.block.start.is_empty() || config.block.end.is_empty() {
        anyhow::bail!("Invalid config: `block.start` and `block.end` must not be empty");
    }

    if config.props.element.is_empty() || config.props.key.is_empty() {
        anyhow::bail!("Invalid config: `props.element` and `props.key` must not be empty");
    }

    Ok(())
}
