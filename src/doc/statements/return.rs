/*!
# `RETURN`

## Purpose
Resume after the most recent `GOSUB`.

## Remarks
Execution continues at the statement following the `GOSUB`, not at
the start of its line. `RETURN` with no `GOSUB` pending is RETURN
WITHOUT GOSUB.

*/
