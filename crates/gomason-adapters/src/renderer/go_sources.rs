//! Go source file bodies for the type-specific project structures.
//!
//! Each generator returns a complete Go file. Import paths are built from
//! the configured module path; `go mod tidy` resolves the third-party
//! requirements on first build. Templates shared between project types
//! (`cmd_root`, `main_api`) only import packages every sharing type plans.

use gomason_core::domain::scaffold::RenderData;

pub fn main_cli(data: &RenderData) -> String {
    format!(
        "package main\n\n\
         import (\n\
         \t\"fmt\"\n\
         \t\"os\"\n\n\
         \t\"{module}/cmd\"\n\
         )\n\n\
         func main() {{\n\
         \tif err := cmd.Execute(); err != nil {{\n\
         \t\tfmt.Fprintln(os.Stderr, err)\n\
         \t\tos.Exit(1)\n\
         \t}}\n\
         }}\n",
        module = data.config.module_path
    )
}

pub fn cmd_root(data: &RenderData) -> String {
    format!(
        "package cmd\n\n\
         import (\n\
         \t\"fmt\"\n\n\
         \t\"github.com/spf13/cobra\"\n\
         )\n\n\
         var rootCmd = &cobra.Command{{\n\
         \tUse:   \"{name}\",\n\
         \tShort: \"{description}\",\n\
         \tRunE: func(cmd *cobra.Command, args []string) error {{\n\
         \t\tfmt.Println(\"{name} ready\")\n\
         \t\treturn nil\n\
         \t}},\n\
         }}\n\n\
         // Execute runs the root command.\n\
         func Execute() error {{\n\
         \treturn rootCmd.Execute()\n\
         }}\n",
        name = data.config.name,
        description = data.config.description,
    )
}

pub fn internal_app(data: &RenderData) -> String {
    format!(
        "package app\n\n\
         import (\n\
         \t\"context\"\n\
         \t\"log/slog\"\n\
         )\n\n\
         // Run is the application entry point, wired from cmd.\n\
         func Run(ctx context.Context) error {{\n\
         \tslog.Info(\"{name} starting\")\n\
         \t_ = ctx\n\
         \treturn nil\n\
         }}\n",
        name = data.config.name
    )
}

pub fn internal_config(data: &RenderData) -> String {
    format!(
        "package config\n\n\
         import \"os\"\n\n\
         // Config holds runtime configuration for {name}.\n\
         type Config struct {{\n\
         \tListenAddr string\n\
         \tLogLevel   string\n\
         }}\n\n\
         // Load reads configuration from the environment.\n\
         func Load() Config {{\n\
         \treturn Config{{\n\
         \t\tListenAddr: getenv(\"LISTEN_ADDR\", \":8080\"),\n\
         \t\tLogLevel:   getenv(\"LOG_LEVEL\", \"info\"),\n\
         \t}}\n\
         }}\n\n\
         func getenv(key, fallback string) string {{\n\
         \tif v := os.Getenv(key); v != \"\" {{\n\
         \t\treturn v\n\
         \t}}\n\
         \treturn fallback\n\
         }}\n",
        name = data.config.name
    )
}

pub fn main_api(data: &RenderData) -> String {
    format!(
        "package main\n\n\
         import (\n\
         \t\"log/slog\"\n\
         \t\"net/http\"\n\
         \t\"os\"\n\n\
         \t\"{module}/internal/config\"\n\
         )\n\n\
         func main() {{\n\
         \tcfg := config.Load()\n\n\
         \tmux := http.NewServeMux()\n\
         \tmux.HandleFunc(\"/healthz\", func(w http.ResponseWriter, r *http.Request) {{\n\
         \t\tw.WriteHeader(http.StatusOK)\n\
         \t}})\n\n\
         \tslog.Info(\"{name} listening\", \"addr\", cfg.ListenAddr)\n\
         \tif err := http.ListenAndServe(cfg.ListenAddr, mux); err != nil {{\n\
         \t\tslog.Error(\"server stopped\", \"err\", err)\n\
         \t\tos.Exit(1)\n\
         \t}}\n\
         }}\n",
        module = data.config.module_path,
        name = data.config.name,
    )
}

pub fn handler(data: &RenderData) -> String {
    format!(
        "package handler\n\n\
         import (\n\
         \t\"encoding/json\"\n\
         \t\"net/http\"\n\n\
         \t\"{module}/internal/service\"\n\
         )\n\n\
         // Handler exposes the HTTP surface over the service layer.\n\
         type Handler struct {{\n\
         \tsvc *service.Service\n\
         }}\n\n\
         func New(svc *service.Service) *Handler {{\n\
         \treturn &Handler{{svc: svc}}\n\
         }}\n\n\
         func (h *Handler) Status(w http.ResponseWriter, r *http.Request) {{\n\
         \tjson.NewEncoder(w).Encode(map[string]string{{\"status\": \"ok\"}})\n\
         }}\n",
        module = data.config.module_path
    )
}

pub fn service(data: &RenderData) -> String {
    format!(
        "package service\n\n\
         import \"{module}/internal/repository\"\n\n\
         // Service holds the business logic, decoupled from transport.\n\
         type Service struct {{\n\
         \trepo *repository.Repository\n\
         }}\n\n\
         func New(repo *repository.Repository) *Service {{\n\
         \treturn &Service{{repo: repo}}\n\
         }}\n",
        module = data.config.module_path
    )
}

pub fn repository(_data: &RenderData) -> String {
    String::from(
        "package repository\n\n\
         // Repository abstracts persistence behind the service layer.\n\
         type Repository struct{}\n\n\
         func New() *Repository {\n\
         \treturn &Repository{}\n\
         }\n",
    )
}

pub fn middleware(_data: &RenderData) -> String {
    String::from(
        "package middleware\n\n\
         import (\n\
         \t\"log/slog\"\n\
         \t\"net/http\"\n\
         \t\"time\"\n\
         )\n\n\
         // Logging wraps a handler with request logging.\n\
         func Logging(next http.Handler) http.Handler {\n\
         \treturn http.HandlerFunc(func(w http.ResponseWriter, r *http.Request) {\n\
         \t\tstart := time.Now()\n\
         \t\tnext.ServeHTTP(w, r)\n\
         \t\tslog.Info(\"request\", \"method\", r.Method, \"path\", r.URL.Path, \"took\", time.Since(start))\n\
         \t})\n\
         }\n",
    )
}

pub fn worker(data: &RenderData) -> String {
    format!(
        "package worker\n\n\
         import (\n\
         \t\"context\"\n\
         \t\"log/slog\"\n\
         \t\"time\"\n\
         )\n\n\
         // Worker runs the background processing loop for {name}.\n\
         type Worker struct {{\n\
         \tInterval time.Duration\n\
         }}\n\n\
         func New(interval time.Duration) *Worker {{\n\
         \treturn &Worker{{Interval: interval}}\n\
         }}\n\n\
         // Run processes work until the context is cancelled.\n\
         func (w *Worker) Run(ctx context.Context) error {{\n\
         \tticker := time.NewTicker(w.Interval)\n\
         \tdefer ticker.Stop()\n\
         \tfor {{\n\
         \t\tselect {{\n\
         \t\tcase <-ctx.Done():\n\
         \t\t\treturn ctx.Err()\n\
         \t\tcase <-ticker.C:\n\
         \t\t\tslog.Info(\"tick\")\n\
         \t\t}}\n\
         \t}}\n\
         }}\n",
        name = data.config.name
    )
}

pub fn scanner(_data: &RenderData) -> String {
    String::from(
        "package scanner\n\n\
         import \"context\"\n\n\
         // Finding is a single result produced by a scan.\n\
         type Finding struct {\n\
         \tID       string\n\
         \tSeverity string\n\
         \tDetail   string\n\
         }\n\n\
         // Scanner walks a target and produces findings.\n\
         type Scanner struct{}\n\n\
         func New() *Scanner {\n\
         \treturn &Scanner{}\n\
         }\n\n\
         func (s *Scanner) Scan(ctx context.Context, target string) ([]Finding, error) {\n\
         \t_ = ctx\n\
         \t_ = target\n\
         \treturn nil, nil\n\
         }\n",
    )
}

pub fn report(_data: &RenderData) -> String {
    String::from(
        "package report\n\n\
         import (\n\
         \t\"encoding/json\"\n\
         \t\"io\"\n\
         )\n\n\
         // Write renders findings as JSON to the given writer.\n\
         func Write(w io.Writer, findings any) error {\n\
         \tenc := json.NewEncoder(w)\n\
         \tenc.SetIndent(\"\", \"  \")\n\
         \treturn enc.Encode(findings)\n\
         }\n",
    )
}

pub fn library(data: &RenderData) -> String {
    format!(
        "// Package {pkg} provides the public API of {name}.\n\
         package {pkg}\n\n\
         // Version is the library version.\n\
         const Version = \"0.1.0\"\n\n\
         // New returns a ready-to-use client.\n\
         func New() *Client {{\n\
         \treturn &Client{{}}\n\
         }}\n\n\
         // Client is the entry point for library consumers.\n\
         type Client struct{{}}\n",
        pkg = data.lib_name,
        name = data.config.name,
    )
}

pub fn library_test(data: &RenderData) -> String {
    format!(
        "package {pkg}\n\n\
         import \"testing\"\n\n\
         func TestNew(t *testing.T) {{\n\
         \tif New() == nil {{\n\
         \t\tt.Fatal(\"expected non-nil client\")\n\
         \t}}\n\
         }}\n",
        pkg = data.lib_name
    )
}
