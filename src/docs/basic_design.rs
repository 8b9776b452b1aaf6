// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The docpack Authors

//! Screen flow and per-screen UX notes.

pub const CONTENT: &str = r#"# 基本設計書 (Basic Design - UI/UX)

## 1. 画面フロー

| ID | 画面名 | 役割 | 備考 |
|:---|:---|:---|:---|
| **S-01** | **Home / Lobby** | スタート画面 | 親機：「部屋を作る」 / 子機：「部屋に入る」 |
| **S-02** | **Game Board** | メイン画面 | 全員のスコア表示。ここからアクション(S-03)へ。 |
| **S-03** | **Action Modal** | 入力パネル | 数値入力、アクション実行（モーダル表示）。 |
| **S-04** | **Builder / Settings** | 設定画面 | 親機専用。レイアウト編集、リセット操作。 |

## 2. 詳細UX

### S-01: Home / Lobby
* シンプルな2択ボタンを表示。
* **Join (子機):** 4桁〜6桁のルームID入力フォーム、またはカメラ起動ボタン（QR用）。
* **Create (親機):** 新規作成ボタン。押下時にSupabaseにレコードを作成し、S-02へ遷移。

### S-02: Game Board
* Supabaseからの変更通知を受け取り、自動で再描画される。
* ヘッダーに「Room ID」を表示し、タップでコピー/QR表示可能にする。

### S-04: Builder (親機のみ)
* プリセット（麻雀など）の選択リスト。
* 「変数の追加」「ボタンの追加」を行い、DBの `template` カラムを更新する。
"#;
