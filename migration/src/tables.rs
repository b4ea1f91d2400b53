use antenne_common::{
    AGENDA_TABLE, ARTICLES_TABLE, AUTHORIZATIONS_TABLE, INFO_TABLE, QUESTIONS_TABLE, SHOWS_TABLE,
    VIDEOS_TABLE,
};

/// Full schema, idempotent. Status columns hold the numeric codes of the
/// per-type enumerations; show statuses need fractional codes for the
/// restream variants, hence DOUBLE PRECISION there.
pub fn schema_statements() -> Vec<String> {
    vec![
        format!(
            "CREATE TABLE IF NOT EXISTS {ARTICLES_TABLE} (
                id BIGSERIAL PRIMARY KEY,
                title TEXT NOT NULL,
                body TEXT NOT NULL,
                thumbnail TEXT NOT NULL,
                thumbnail_src TEXT NOT NULL,
                category TEXT NOT NULL,
                author TEXT NOT NULL,
                views INT NOT NULL DEFAULT 0,
                date TIMESTAMPTZ NOT NULL,
                status SMALLINT NOT NULL
            )"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {VIDEOS_TABLE} (
                id BIGSERIAL PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                thumbnail TEXT NOT NULL,
                video_id TEXT NOT NULL,
                platform TEXT NOT NULL,
                category TEXT NOT NULL,
                author TEXT NOT NULL,
                date TIMESTAMPTZ NOT NULL,
                status SMALLINT NOT NULL
            )"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {SHOWS_TABLE} (
                id BIGSERIAL PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                thumbnail TEXT NOT NULL,
                stream_id TEXT,
                podcast_id TEXT,
                prompter TEXT,
                date TIMESTAMPTZ NOT NULL,
                status DOUBLE PRECISION NOT NULL
            )"
        ),
        // Backstop for the live-show mutual exclusion: at most one row may
        // hold a live-family status, whatever the request interleaving.
        format!(
            "CREATE UNIQUE INDEX IF NOT EXISTS {SHOWS_TABLE}_single_live
                ON {SHOWS_TABLE} ((1))
                WHERE status IN (-1, -1.5, 0, 0.5)"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {QUESTIONS_TABLE} (
                id BIGSERIAL PRIMARY KEY,
                show_id BIGINT NOT NULL REFERENCES {SHOWS_TABLE}(id) ON DELETE CASCADE,
                question TEXT NOT NULL,
                date TIMESTAMPTZ NOT NULL
            )"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {AUTHORIZATIONS_TABLE} (
                id BIGSERIAL PRIMARY KEY,
                element_type TEXT NOT NULL,
                element_id BIGINT NOT NULL,
                content TEXT NOT NULL,
                status SMALLINT NOT NULL,
                submit_date TIMESTAMPTZ NOT NULL,
                manager TEXT,
                comments TEXT,
                response_date TIMESTAMPTZ,
                signature TEXT
            )"
        ),
        // Backstop for the one-open-authorization-per-element invariant.
        format!(
            "CREATE UNIQUE INDEX IF NOT EXISTS {AUTHORIZATIONS_TABLE}_single_open
                ON {AUTHORIZATIONS_TABLE} (element_type, element_id)
                WHERE status < 0"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {AGENDA_TABLE} (
                id BIGSERIAL PRIMARY KEY,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                thumbnail TEXT NOT NULL,
                color TEXT NOT NULL,
                date TIMESTAMPTZ NOT NULL
            )"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {INFO_TABLE} (
                id BIGSERIAL PRIMARY KEY,
                html TEXT NOT NULL,
                css TEXT NOT NULL,
                enabled BOOLEAN NOT NULL DEFAULT FALSE
            )"
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statements_are_idempotent() {
        for ddl in schema_statements() {
            assert!(
                ddl.contains("IF NOT EXISTS"),
                "statement must be rerunnable: {ddl}"
            );
        }
    }

    #[test]
    fn race_closing_indexes_present() {
        let all = schema_statements().join("\n");
        assert!(all.contains("webradio_shows_single_live"));
        assert!(all.contains("authorizations_single_open"));
    }
}
